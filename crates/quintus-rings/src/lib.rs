//! # quintus-rings
//!
//! Ring contexts for the Quintus generic linear algebra kernel.
//!
//! This crate provides:
//! - The [`RingContext`] contract: a runtime description of an algebraic
//!   structure together with its operations
//! - [`Status`]: the closed set of operation outcomes (success,
//!   domain-error, unable) with worst-case combination
//! - [`Truth`]: three-valued decision results for predicates whose answer
//!   cannot always be derived
//! - Concrete contexts: the integers, the rationals, and prime fields
//!
//! ## Three-valued logic
//!
//! In a general ring, "is this element zero?" may be undecidable. Every
//! predicate in this crate therefore answers with a [`Truth`] rather than
//! a boolean, and every composite operation propagates "cannot decide"
//! instead of silently coercing it to false.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod integers;
pub mod modular;
pub mod rationals;
pub mod status;
pub mod truth;

#[cfg(test)]
mod proptests;

pub use context::{ElemDisplay, RingContext};
pub use integers::IntegerRing;
pub use modular::PrimeField;
pub use rationals::RationalField;
pub use status::{RingError, Status};
pub use truth::Truth;

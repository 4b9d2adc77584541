//! # quintus-linalg
//!
//! Dense linear algebra over generic ring contexts.
//!
//! This crate provides:
//! - Elementwise vector operations over any [`quintus_rings::RingContext`]
//! - [`Mat`]: a dense matrix with O(1) row swaps via row-index indirection
//! - [`MatRingCtx`]: matrices as ring elements (so matrices of matrices nest)
//! - Rank-revealing LU decomposition driven by three-valued zero tests
//!
//! ## Partial information
//!
//! Over rings with undecidable equality a zero test may answer
//! "unknown". The decomposition engine never treats an unknown as a
//! definite answer: an undecidable pivot search aborts the whole
//! reduction with [`quintus_rings::Status::Unable`], because a rank
//! computed past that point would not be trustworthy.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lu;
pub mod mat;
pub mod mat_ring;
pub mod vec;

pub use lu::{find_pivot, lu_classical, LuDecomposition, PivotSearch};
pub use mat::Mat;
pub use mat_ring::MatRingCtx;

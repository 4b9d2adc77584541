//! # Quintus
//!
//! Exact linear algebra over generic rings.
//!
//! Quintus separates *what ring you compute in* from *what you compute*:
//! algorithms are written once against a runtime ring description and
//! work over the integers, the rationals, prime fields, and rings of
//! matrices over any of those.
//!
//! ## Features
//!
//! - **Ring Contexts**: one contract for elements, arithmetic, and predicates
//! - **Honest Partiality**: predicates answer true/false/unknown, operations
//!   report success/domain-error/unable
//! - **Dense Matrices**: O(1) row swaps via row-index indirection
//! - **Matrix Rings**: matrices as ring elements, nestable to any depth
//! - **Rank-Revealing LU**: Gaussian elimination that refuses to guess when
//!   a zero test cannot be decided
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quintus::prelude::*;
//!
//! let q = RationalField::new();
//! let mut a = Mat::init(3, 3, &q);
//! // ... fill a ...
//! let mut lu = Mat::init(3, 3, &q);
//! let dec = lu_classical(&mut lu, &a, false, &q);
//! assert_eq!(dec.status, Status::Ok);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quintus_linalg as linalg;
pub use quintus_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quintus_linalg::{find_pivot, lu_classical, LuDecomposition, Mat, MatRingCtx, PivotSearch};
    pub use quintus_rings::{
        IntegerRing, PrimeField, RationalField, RingContext, RingError, Status, Truth,
    };
}

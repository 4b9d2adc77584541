//! Operation status codes.
//!
//! Every fallible ring operation reports one of a small closed set of
//! outcomes. [`Status`] forms an ordered lattice `Ok < Unable < Domain`;
//! combining two statuses keeps the worse one, so a composite operation
//! reports the worst outcome among all of its suboperations.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use thiserror::Error;

/// The outcome of a ring or matrix operation.
///
/// `Unable` and `Domain` are first-class return values, not exceptions:
/// callers branch on them. They must never be conflated with each other
/// or with a boolean false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub enum Status {
    /// The operation completed and its result is meaningful.
    #[default]
    Ok,
    /// The answer could not be derived from the available information.
    ///
    /// The operation may well be defined; the implementation simply
    /// cannot prove what its result is (for example a zero test in a
    /// ring with undecidable equality).
    Unable,
    /// The operation is provably undefined for the given operands:
    /// shape mismatch, non-invertible pivot, a provably zero column
    /// where a nonzero pivot was required.
    Domain,
}

impl Status {
    /// Returns true if the status is [`Status::Ok`].
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Worst-case combination of two statuses.
    ///
    /// This is the explicit combine function of the lattice
    /// `Ok < Unable < Domain`; `|` and `|=` are sugar for it.
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    /// Converts to a [`Result`], mapping the non-success statuses to
    /// [`RingError`] for callers that speak `?`.
    ///
    /// # Errors
    ///
    /// `Unable` and `Domain` become the corresponding error variants.
    pub fn into_result(self) -> Result<(), RingError> {
        match self {
            Status::Ok => Ok(()),
            Status::Unable => Err(RingError::Unable),
            Status::Domain => Err(RingError::Domain),
        }
    }
}

impl BitOr for Status {
    type Output = Status;

    fn bitor(self, rhs: Status) -> Status {
        self.combine(rhs)
    }
}

impl BitOrAssign for Status {
    fn bitor_assign(&mut self, rhs: Status) {
        *self = self.combine(rhs);
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "success"),
            Status::Unable => write!(f, "unable"),
            Status::Domain => write!(f, "domain error"),
        }
    }
}

/// Error form of the non-success statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// See [`Status::Unable`].
    #[error("unable to decide the result with the available information")]
    Unable,
    /// See [`Status::Domain`].
    #[error("operation undefined for the given operands")]
    Domain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_order() {
        assert!(Status::Ok < Status::Unable);
        assert!(Status::Unable < Status::Domain);
    }

    #[test]
    fn test_combine_keeps_worst() {
        assert_eq!(Status::Ok | Status::Ok, Status::Ok);
        assert_eq!(Status::Ok | Status::Unable, Status::Unable);
        assert_eq!(Status::Domain | Status::Unable, Status::Domain);

        let mut status = Status::Ok;
        status |= Status::Unable;
        status |= Status::Ok;
        assert_eq!(status, Status::Unable);
    }

    #[test]
    fn test_into_result() {
        assert!(Status::Ok.into_result().is_ok());
        assert_eq!(Status::Unable.into_result(), Err(RingError::Unable));
        assert_eq!(Status::Domain.into_result(), Err(RingError::Domain));
    }
}

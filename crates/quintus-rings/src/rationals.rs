//! The field of rational numbers Q.

use std::cmp::Ordering;
use std::fmt;

use dashu::base::{Inverse, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use rand::RngCore;

use crate::context::RingContext;
use crate::status::Status;
use crate::truth::Truth;

/// The field of rational numbers over `dashu` bignums.
///
/// An exact field with decidable equality: every nonzero element is a
/// unit, so LU decomposition over this context always resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RationalField;

impl RationalField {
    /// Creates the rational field context.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl fmt::Display for RationalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational field (Q)")
    }
}

impl RingContext for RationalField {
    type Elem = RBig;

    fn init(&self) -> RBig {
        RBig::ZERO
    }

    fn zero(&self, dst: &mut RBig) -> Status {
        *dst = RBig::ZERO;
        Status::Ok
    }

    fn one(&self, dst: &mut RBig) -> Status {
        *dst = RBig::ONE;
        Status::Ok
    }

    fn neg(&self, dst: &mut RBig, src: &RBig) -> Status {
        *dst = -src.clone();
        Status::Ok
    }

    fn add(&self, dst: &mut RBig, a: &RBig, b: &RBig) -> Status {
        *dst = a + b;
        Status::Ok
    }

    fn sub(&self, dst: &mut RBig, a: &RBig, b: &RBig) -> Status {
        *dst = a - b;
        Status::Ok
    }

    fn mul(&self, dst: &mut RBig, a: &RBig, b: &RBig) -> Status {
        *dst = a * b;
        Status::Ok
    }

    fn inv(&self, dst: &mut RBig, src: &RBig) -> Status {
        if *src == RBig::ZERO {
            Status::Domain
        } else {
            *dst = src.clone().inv();
            Status::Ok
        }
    }

    fn is_zero(&self, x: &RBig) -> Truth {
        Truth::from_bool(*x == RBig::ZERO)
    }

    fn is_one(&self, x: &RBig) -> Truth {
        Truth::from_bool(*x == RBig::ONE)
    }

    fn equal(&self, a: &RBig, b: &RBig) -> Truth {
        Truth::from_bool(a == b)
    }

    fn set_i64(&self, dst: &mut RBig, v: i64) -> Status {
        *dst = RBig::from_parts(IBig::from(v), UBig::ONE);
        Status::Ok
    }

    fn set_integer(&self, dst: &mut RBig, v: &IBig) -> Status {
        *dst = RBig::from_parts(v.clone(), UBig::ONE);
        Status::Ok
    }

    fn set_rational(&self, dst: &mut RBig, v: &RBig) -> Status {
        *dst = v.clone();
        Status::Ok
    }

    fn random(&self, dst: &mut RBig, rng: &mut dyn RngCore) -> Status {
        // Small numerators and denominators for test matrices.
        let num = i64::try_from(rng.next_u64() % 21).unwrap_or(0) - 10;
        let den = rng.next_u64() % 9 + 1;
        *dst = RBig::from_parts(IBig::from(num), UBig::from(den));
        Status::Ok
    }

    fn write_elem(&self, f: &mut fmt::Formatter<'_>, x: &RBig) -> fmt::Result {
        if *x.denominator() == UBig::ONE {
            write!(f, "{}", x.numerator())
        } else {
            write!(f, "{}/{}", x.numerator(), x.denominator())
        }
    }

    fn cmp_repr(&self, a: &RBig, b: &RBig) -> Ordering {
        // Prefer pivots with small denominators, then small numerators.
        a.denominator().cmp(b.denominator()).then_with(|| {
            a.numerator()
                .clone()
                .unsigned_abs()
                .cmp(&b.numerator().clone().unsigned_abs())
        })
    }
}

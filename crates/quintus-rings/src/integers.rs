//! The ring of integers Z.

use std::cmp::Ordering;
use std::fmt;

use dashu::base::UnsignedAbs;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use rand::RngCore;

use crate::context::RingContext;
use crate::status::Status;
use crate::truth::Truth;

/// The ring of integers over `dashu` bignums.
///
/// Equality is decidable, so predicates never answer `Unknown`. Only
/// the units ±1 are invertible; `inv` reports `Domain` for everything
/// else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegerRing;

impl IntegerRing {
    /// Creates the integer ring context.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl fmt::Display for IntegerRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer ring (Z)")
    }
}

impl RingContext for IntegerRing {
    type Elem = IBig;

    fn init(&self) -> IBig {
        IBig::ZERO
    }

    fn zero(&self, dst: &mut IBig) -> Status {
        *dst = IBig::ZERO;
        Status::Ok
    }

    fn one(&self, dst: &mut IBig) -> Status {
        *dst = IBig::ONE;
        Status::Ok
    }

    fn neg(&self, dst: &mut IBig, src: &IBig) -> Status {
        *dst = -src.clone();
        Status::Ok
    }

    fn add(&self, dst: &mut IBig, a: &IBig, b: &IBig) -> Status {
        *dst = a + b;
        Status::Ok
    }

    fn sub(&self, dst: &mut IBig, a: &IBig, b: &IBig) -> Status {
        *dst = a - b;
        Status::Ok
    }

    fn mul(&self, dst: &mut IBig, a: &IBig, b: &IBig) -> Status {
        *dst = a * b;
        Status::Ok
    }

    fn inv(&self, dst: &mut IBig, src: &IBig) -> Status {
        if *src == IBig::ONE || *src == -IBig::ONE {
            *dst = src.clone();
            Status::Ok
        } else {
            Status::Domain
        }
    }

    fn is_zero(&self, x: &IBig) -> Truth {
        Truth::from_bool(*x == IBig::ZERO)
    }

    fn is_one(&self, x: &IBig) -> Truth {
        Truth::from_bool(*x == IBig::ONE)
    }

    fn is_neg_one(&self, x: &IBig) -> Truth {
        Truth::from_bool(*x == -IBig::ONE)
    }

    fn equal(&self, a: &IBig, b: &IBig) -> Truth {
        Truth::from_bool(a == b)
    }

    fn set_i64(&self, dst: &mut IBig, v: i64) -> Status {
        *dst = IBig::from(v);
        Status::Ok
    }

    fn set_u64(&self, dst: &mut IBig, v: u64) -> Status {
        *dst = IBig::from(v);
        Status::Ok
    }

    fn set_integer(&self, dst: &mut IBig, v: &IBig) -> Status {
        *dst = v.clone();
        Status::Ok
    }

    fn set_rational(&self, dst: &mut IBig, v: &RBig) -> Status {
        if *v.denominator() == UBig::ONE {
            *dst = v.numerator().clone();
            Status::Ok
        } else {
            Status::Domain
        }
    }

    fn random(&self, dst: &mut IBig, rng: &mut dyn RngCore) -> Status {
        // Small test values, like the original random matrix drivers.
        let r = rng.next_u64() % 21;
        *dst = IBig::from(i64::try_from(r).unwrap_or(0) - 10);
        Status::Ok
    }

    fn write_elem(&self, f: &mut fmt::Formatter<'_>, x: &IBig) -> fmt::Result {
        write!(f, "{x}")
    }

    fn cmp_repr(&self, a: &IBig, b: &IBig) -> Ordering {
        // Prefer pivots of smaller magnitude.
        a.clone().unsigned_abs().cmp(&b.clone().unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let ctx = IntegerRing::new();
        let a = IBig::from(10);
        let b = IBig::from(3);

        let mut sum = ctx.init();
        let mut prod = ctx.init();
        assert!(ctx.add(&mut sum, &a, &b).is_ok());
        assert!(ctx.mul(&mut prod, &a, &b).is_ok());
        assert_eq!(sum, IBig::from(13));
        assert_eq!(prod, IBig::from(30));
    }

    #[test]
    fn test_only_units_invert() {
        let ctx = IntegerRing::new();
        let mut dst = ctx.init();

        assert_eq!(ctx.inv(&mut dst, &IBig::ONE), Status::Ok);
        assert_eq!(ctx.inv(&mut dst, &IBig::from(-1)), Status::Ok);
        assert_eq!(dst, IBig::from(-1));
        assert_eq!(ctx.inv(&mut dst, &IBig::from(2)), Status::Domain);
        assert_eq!(ctx.inv(&mut dst, &IBig::ZERO), Status::Domain);
    }

    #[test]
    fn test_predicates_are_decidable() {
        let ctx = IntegerRing::new();
        assert_eq!(ctx.is_zero(&IBig::ZERO), Truth::True);
        assert_eq!(ctx.is_zero(&IBig::from(7)), Truth::False);
        assert_eq!(ctx.is_neg_one(&IBig::from(-1)), Truth::True);
        assert_eq!(ctx.equal(&IBig::from(4), &IBig::from(4)), Truth::True);
    }

    #[test]
    fn test_set_rational_requires_integral() {
        let ctx = IntegerRing::new();
        let mut dst = ctx.init();

        let three = RBig::from_parts(IBig::from(3), UBig::ONE);
        assert_eq!(ctx.set_rational(&mut dst, &three), Status::Ok);
        assert_eq!(dst, IBig::from(3));

        let half = RBig::from_parts(IBig::ONE, UBig::from(2u8));
        assert_eq!(ctx.set_rational(&mut dst, &half), Status::Domain);
    }

    #[test]
    fn test_cmp_repr_prefers_small_magnitude() {
        let ctx = IntegerRing::new();
        assert_eq!(
            ctx.cmp_repr(&IBig::from(2), &IBig::from(-100)),
            Ordering::Less
        );
        assert_eq!(
            ctx.cmp_repr(&IBig::from(-5), &IBig::from(5)),
            Ordering::Equal
        );
    }
}

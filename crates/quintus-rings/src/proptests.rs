//! Property-based tests for the concrete ring contexts.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;

    use crate::{IntegerRing, PrimeField, RationalField, RingContext, Status, Truth};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero residues mod 97
    fn non_zero_residue() -> impl Strategy<Value = u64> {
        1u64..97u64
    }

    proptest! {
        // Integer ring axioms through the context contract

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let ctx = IntegerRing::new();
            let (a, b) = (IBig::from(a), IBig::from(b));
            let mut ab = ctx.init();
            let mut ba = ctx.init();
            prop_assert!(ctx.add(&mut ab, &a, &b).is_ok());
            prop_assert!(ctx.add(&mut ba, &b, &a).is_ok());
            prop_assert_eq!(ctx.equal(&ab, &ba), Truth::True);
        }

        #[test]
        fn integer_mul_distributes(a in small_int(), b in small_int(), c in small_int()) {
            let ctx = IntegerRing::new();
            let (a, b, c) = (IBig::from(a), IBig::from(b), IBig::from(c));

            // a * (b + c)
            let mut bc = ctx.init();
            let mut lhs = ctx.init();
            prop_assert!(ctx.add(&mut bc, &b, &c).is_ok());
            prop_assert!(ctx.mul(&mut lhs, &a, &bc).is_ok());

            // a*b + a*c
            let mut ab = ctx.init();
            let mut ac = ctx.init();
            let mut rhs = ctx.init();
            prop_assert!(ctx.mul(&mut ab, &a, &b).is_ok());
            prop_assert!(ctx.mul(&mut ac, &a, &c).is_ok());
            prop_assert!(ctx.add(&mut rhs, &ab, &ac).is_ok());

            prop_assert_eq!(ctx.equal(&lhs, &rhs), Truth::True);
        }

        #[test]
        fn integer_sub_inverts_add(a in small_int(), b in small_int()) {
            let ctx = IntegerRing::new();
            let (a, b) = (IBig::from(a), IBig::from(b));
            let mut sum = ctx.init();
            let mut back = ctx.init();
            prop_assert!(ctx.add(&mut sum, &a, &b).is_ok());
            prop_assert!(ctx.sub(&mut back, &sum, &b).is_ok());
            prop_assert_eq!(ctx.equal(&back, &a), Truth::True);
        }

        // Prime field axioms

        #[test]
        fn prime_field_inverse_law(x in non_zero_residue()) {
            let f97 = PrimeField::new(97);
            let mut xinv = f97.init();
            prop_assert_eq!(f97.inv(&mut xinv, &x), Status::Ok);

            let mut prod = f97.init();
            prop_assert!(f97.mul(&mut prod, &x, &xinv).is_ok());
            prop_assert_eq!(f97.is_one(&prod), Truth::True);
        }

        #[test]
        fn prime_field_neg_cancels(x in 0u64..97u64) {
            let f97 = PrimeField::new(97);
            let mut nx = f97.init();
            let mut sum = f97.init();
            prop_assert!(f97.neg(&mut nx, &x).is_ok());
            prop_assert!(f97.add(&mut sum, &x, &nx).is_ok());
            prop_assert_eq!(f97.is_zero(&sum), Truth::True);
        }

        // Rational embedding round trips

        #[test]
        fn rational_integer_embedding(v in small_int()) {
            let ctx = RationalField::new();
            let mut from_i64 = ctx.init();
            let mut from_big = ctx.init();
            prop_assert!(ctx.set_i64(&mut from_i64, v).is_ok());
            prop_assert!(ctx.set_integer(&mut from_big, &IBig::from(v)).is_ok());
            prop_assert_eq!(ctx.equal(&from_i64, &from_big), Truth::True);
        }

        #[test]
        fn prime_field_embedding_is_hom(a in small_int(), b in small_int()) {
            let f97 = PrimeField::new(97);
            let mut ea = f97.init();
            let mut eb = f97.init();
            let mut esum = f97.init();
            prop_assert!(f97.set_i64(&mut ea, a).is_ok());
            prop_assert!(f97.set_i64(&mut eb, b).is_ok());
            prop_assert!(f97.set_integer(&mut esum, &(IBig::from(a) + IBig::from(b))).is_ok());

            let mut sum = f97.init();
            prop_assert!(f97.add(&mut sum, &ea, &eb).is_ok());
            prop_assert_eq!(f97.equal(&sum, &esum), Truth::True);
        }
    }
}

//! Prime fields Z/p with a dynamic word-size modulus.

use std::fmt;

use dashu::integer::IBig;
use rand::RngCore;

use crate::context::RingContext;
use crate::status::Status;
use crate::truth::Truth;

/// The field of integers modulo a prime `p` that fits in a `u64`.
///
/// Elements are canonical residues in `0..p`. The modulus is not
/// checked for primality; with a composite modulus `inv` simply reports
/// `Domain` for the non-units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Creates the field Z/p.
    ///
    /// # Panics
    ///
    /// Panics if `p < 2`.
    #[must_use]
    pub fn new(p: u64) -> Self {
        assert!(p >= 2, "modulus must be at least 2");
        Self { p }
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.p
    }

    fn reduce_mul(&self, a: u64, b: u64) -> u64 {
        let wide = u128::from(a) * u128::from(b);
        (wide % u128::from(self.p)) as u64
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prime field (Z/{})", self.p)
    }
}

impl RingContext for PrimeField {
    type Elem = u64;

    fn init(&self) -> u64 {
        0
    }

    fn zero(&self, dst: &mut u64) -> Status {
        *dst = 0;
        Status::Ok
    }

    fn one(&self, dst: &mut u64) -> Status {
        *dst = 1 % self.p;
        Status::Ok
    }

    fn neg(&self, dst: &mut u64, src: &u64) -> Status {
        *dst = if *src == 0 { 0 } else { self.p - *src };
        Status::Ok
    }

    fn add(&self, dst: &mut u64, a: &u64, b: &u64) -> Status {
        let sum = a.wrapping_add(*b);
        *dst = if sum >= self.p || sum < *a {
            sum.wrapping_sub(self.p)
        } else {
            sum
        };
        Status::Ok
    }

    fn sub(&self, dst: &mut u64, a: &u64, b: &u64) -> Status {
        *dst = if a >= b { a - b } else { self.p - (b - a) };
        Status::Ok
    }

    fn mul(&self, dst: &mut u64, a: &u64, b: &u64) -> Status {
        *dst = self.reduce_mul(*a, *b);
        Status::Ok
    }

    fn inv(&self, dst: &mut u64, src: &u64) -> Status {
        if *src == 0 {
            return Status::Domain;
        }

        // Extended Euclidean algorithm.
        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(self.p);
        let mut new_r = i128::from(*src);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        if r > 1 {
            // Not coprime with the modulus.
            return Status::Domain;
        }

        if t < 0 {
            t += i128::from(self.p);
        }
        *dst = t as u64;
        Status::Ok
    }

    fn is_zero(&self, x: &u64) -> Truth {
        Truth::from_bool(*x == 0)
    }

    fn is_one(&self, x: &u64) -> Truth {
        Truth::from_bool(*x == 1 % self.p)
    }

    fn is_neg_one(&self, x: &u64) -> Truth {
        Truth::from_bool(*x == self.p - 1)
    }

    fn equal(&self, a: &u64, b: &u64) -> Truth {
        Truth::from_bool(a == b)
    }

    fn set_i64(&self, dst: &mut u64, v: i64) -> Status {
        *dst = if v >= 0 {
            (v as u64) % self.p
        } else {
            (self.p - v.unsigned_abs() % self.p) % self.p
        };
        Status::Ok
    }

    fn set_u64(&self, dst: &mut u64, v: u64) -> Status {
        *dst = v % self.p;
        Status::Ok
    }

    fn set_integer(&self, dst: &mut u64, v: &IBig) -> Status {
        let m = IBig::from(self.p);
        let mut r = v.clone() % m.clone();
        if r < IBig::ZERO {
            r = r + m;
        }
        match u64::try_from(r) {
            Ok(x) => {
                *dst = x;
                Status::Ok
            }
            Err(_) => Status::Domain,
        }
    }

    fn random(&self, dst: &mut u64, rng: &mut dyn RngCore) -> Status {
        *dst = rng.next_u64() % self.p;
        Status::Ok
    }

    fn write_elem(&self, f: &mut fmt::Formatter<'_>, x: &u64) -> fmt::Result {
        write!(f, "{x}")
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn cardinality_bound(&self) -> Option<u128> {
        Some(u128::from(self.p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let f7 = PrimeField::new(7);
        let mut dst = 0;

        assert!(f7.add(&mut dst, &5, &4).is_ok());
        assert_eq!(dst, 2); // 5 + 4 = 9 ≡ 2 (mod 7)

        assert!(f7.sub(&mut dst, &5, &4).is_ok());
        assert_eq!(dst, 1);

        assert!(f7.mul(&mut dst, &5, &4).is_ok());
        assert_eq!(dst, 6); // 20 ≡ 6 (mod 7)

        assert!(f7.neg(&mut dst, &3).is_ok());
        assert_eq!(dst, 4);
    }

    #[test]
    fn test_inverse() {
        let f7 = PrimeField::new(7);
        let mut dst = 0;

        // 3 * 5 = 15 ≡ 1 (mod 7)
        assert_eq!(f7.inv(&mut dst, &3), Status::Ok);
        assert_eq!(dst, 5);

        assert_eq!(f7.inv(&mut dst, &0), Status::Domain);
    }

    #[test]
    fn test_inverse_non_coprime() {
        let z6 = PrimeField::new(6);
        let mut dst = 0;
        assert_eq!(z6.inv(&mut dst, &2), Status::Domain);
        assert_eq!(z6.inv(&mut dst, &5), Status::Ok);
        assert_eq!(dst, 5); // 5 * 5 = 25 ≡ 1 (mod 6)
    }

    #[test]
    fn test_signed_embedding() {
        let f7 = PrimeField::new(7);
        let mut dst = 0;
        assert!(f7.set_i64(&mut dst, -3).is_ok());
        assert_eq!(dst, 4); // -3 ≡ 4 (mod 7)
    }

    #[test]
    fn test_big_integer_embedding() {
        let f7 = PrimeField::new(7);
        let mut dst = 0;
        assert!(f7.set_integer(&mut dst, &IBig::from(-10)).is_ok());
        assert_eq!(dst, 4); // -10 ≡ 4 (mod 7)
    }

    #[test]
    fn test_capabilities() {
        let f7 = PrimeField::new(7);
        assert!(f7.is_finite());
        assert_eq!(f7.cardinality_bound(), Some(7));
    }
}

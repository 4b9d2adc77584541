//! Matrices as ring elements.
//!
//! [`MatRingCtx`] wraps a base context and presents the ring of `n x n`
//! matrices over it through the same [`RingContext`] contract. Since
//! the wrapper satisfies the contract it wraps, the construction nests:
//! a `MatRingCtx` over a `MatRingCtx` yields matrices whose entries are
//! matrices.

use std::fmt;

use dashu::integer::IBig;
use dashu::rational::RBig;
use quintus_rings::{RingContext, Status, Truth};
use rand::RngCore;

use crate::mat::Mat;

/// The ring of `n x n` matrices over a base ring.
///
/// Borrows the base context, so the base is guaranteed to outlive every
/// matrix-ring element created through the wrapper.
#[derive(Clone, Copy, Debug)]
pub struct MatRingCtx<'a, R> {
    base: &'a R,
    n: usize,
}

impl<'a, R: RingContext> MatRingCtx<'a, R> {
    /// Wraps `base` as the ring of `n x n` matrices over it.
    #[must_use]
    pub fn new(base: &'a R, n: usize) -> Self {
        Self { base, n }
    }

    /// Matrix dimension of this ring's elements.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.n
    }

    /// The wrapped base context.
    #[must_use]
    pub fn base(&self) -> &'a R {
        self.base
    }
}

impl<R: RingContext> fmt::Display for MatRingCtx<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring of {} x {} matrices over {}", self.n, self.n, self.base)
    }
}

impl<R: RingContext> RingContext for MatRingCtx<'_, R> {
    type Elem = Mat<R::Elem>;

    fn init(&self) -> Self::Elem {
        Mat::init(self.n, self.n, self.base)
    }

    fn set(&self, dst: &mut Self::Elem, src: &Self::Elem) -> Status {
        dst.set(src, self.base)
    }

    fn zero(&self, dst: &mut Self::Elem) -> Status {
        dst.zero(self.base)
    }

    fn one(&self, dst: &mut Self::Elem) -> Status {
        dst.one(self.base)
    }

    fn neg(&self, dst: &mut Self::Elem, src: &Self::Elem) -> Status {
        let mut tmp = self.init();
        let status = tmp.neg(src, self.base);
        dst.swap(&mut tmp);
        status
    }

    fn add(&self, dst: &mut Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Status {
        let mut tmp = self.init();
        let status = tmp.add(a, b, self.base);
        dst.swap(&mut tmp);
        status
    }

    fn sub(&self, dst: &mut Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Status {
        let mut tmp = self.init();
        let status = tmp.sub(a, b, self.base);
        dst.swap(&mut tmp);
        status
    }

    fn mul(&self, dst: &mut Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Status {
        let mut tmp = self.init();
        let status = tmp.mul_classical(a, b, self.base);
        dst.swap(&mut tmp);
        status
    }

    /// Matrix inversion is not provided by this wrapper; the answer is
    /// always `Unable`, never a wrong `Domain`.
    fn inv(&self, _dst: &mut Self::Elem, _src: &Self::Elem) -> Status {
        Status::Unable
    }

    fn is_zero(&self, x: &Self::Elem) -> Truth {
        x.is_zero(self.base)
    }

    fn is_one(&self, x: &Self::Elem) -> Truth {
        x.is_one(self.base)
    }

    fn is_neg_one(&self, x: &Self::Elem) -> Truth {
        x.is_neg_one(self.base)
    }

    fn equal(&self, a: &Self::Elem, b: &Self::Elem) -> Truth {
        a.equal(b, self.base)
    }

    fn set_i64(&self, dst: &mut Self::Elem, v: i64) -> Status {
        dst.set_i64(v, self.base)
    }

    fn set_u64(&self, dst: &mut Self::Elem, v: u64) -> Status {
        dst.set_u64(v, self.base)
    }

    fn set_integer(&self, dst: &mut Self::Elem, v: &IBig) -> Status {
        dst.set_integer(v, self.base)
    }

    /// Embeds a rational diagonally through the base ring rather than
    /// dividing in the matrix ring, where division is unavailable.
    fn set_rational(&self, dst: &mut Self::Elem, v: &RBig) -> Status {
        dst.set_rational(v, self.base)
    }

    fn random(&self, dst: &mut Self::Elem, rng: &mut dyn RngCore) -> Status {
        dst.randomize(rng, self.base)
    }

    fn write_elem(&self, f: &mut fmt::Formatter<'_>, x: &Self::Elem) -> fmt::Result {
        write!(f, "{}", x.display(self.base))
    }

    fn is_finite(&self) -> bool {
        self.base.is_finite()
    }

    fn cardinality_bound(&self) -> Option<u128> {
        let base = self.base.cardinality_bound()?;
        let exp = u32::try_from(self.n.checked_mul(self.n)?).ok()?;
        base.checked_pow(exp)
    }
}

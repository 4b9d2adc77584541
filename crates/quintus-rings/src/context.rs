//! The ring context contract.
//!
//! A ring context describes an algebraic structure at runtime: how to
//! create elements, compute with them, and (partially) decide predicates
//! about them. Everything in `quintus-linalg` is written against this
//! contract alone, and the matrix-ring wrapper there implements the same
//! contract, so matrices over a ring are themselves ring elements.
//!
//! Operations write into caller-provided destinations and report a
//! [`Status`]; composite callers combine sub-statuses with `|=` so that
//! the worst sub-outcome is visible in the final result.

use std::cmp::Ordering;
use std::fmt;

use dashu::integer::IBig;
use dashu::rational::RBig;
use rand::RngCore;

use crate::status::Status;
use crate::truth::Truth;

/// A runtime description of a ring together with its operations.
///
/// Contexts are cheap-to-share descriptors. Elements never own their
/// context; a single context may serve any number of elements, and its
/// lifetime is the caller's responsibility. Element teardown is handled
/// by ownership: dropping an element releases it exactly once.
///
/// Destination and source parameters are always distinct references, so
/// operand/result aliasing cannot arise; in-place variants (`add_assign`,
/// `neg_assign`, ...) cover the cases where the destination is also an
/// operand.
pub trait RingContext: fmt::Display {
    /// Element representation for this ring.
    ///
    /// Opaque to consumers: elements are never inspected or compared
    /// except through the operations of their context.
    type Elem: Clone + fmt::Debug;

    /// Creates a new element holding the ring's zero.
    fn init(&self) -> Self::Elem;

    /// Exchanges two elements without touching their representations.
    fn swap(&self, a: &mut Self::Elem, b: &mut Self::Elem) {
        std::mem::swap(a, b);
    }

    /// `dst = src`.
    fn set(&self, dst: &mut Self::Elem, src: &Self::Elem) -> Status {
        dst.clone_from(src);
        Status::Ok
    }

    /// `dst = 0`.
    fn zero(&self, dst: &mut Self::Elem) -> Status;

    /// `dst = 1`.
    fn one(&self, dst: &mut Self::Elem) -> Status;

    /// `dst = -src`.
    fn neg(&self, dst: &mut Self::Elem, src: &Self::Elem) -> Status;

    /// `dst = a + b`.
    fn add(&self, dst: &mut Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Status;

    /// `dst = a - b`.
    fn sub(&self, dst: &mut Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Status;

    /// `dst = a * b`.
    fn mul(&self, dst: &mut Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Status;

    /// `dst = src^-1`.
    ///
    /// Reports `Domain` when `src` is provably not a unit and `Unable`
    /// when invertibility cannot be decided.
    fn inv(&self, dst: &mut Self::Elem, src: &Self::Elem) -> Status;

    /// In-place `dst = dst + src`.
    fn add_assign(&self, dst: &mut Self::Elem, src: &Self::Elem) -> Status {
        let mut tmp = self.init();
        let status = self.add(&mut tmp, dst, src);
        self.swap(dst, &mut tmp);
        status
    }

    /// In-place `dst = dst * src`.
    fn mul_assign(&self, dst: &mut Self::Elem, src: &Self::Elem) -> Status {
        let mut tmp = self.init();
        let status = self.mul(&mut tmp, dst, src);
        self.swap(dst, &mut tmp);
        status
    }

    /// In-place `x = -x`.
    fn neg_assign(&self, x: &mut Self::Elem) -> Status {
        let mut tmp = self.init();
        let status = self.neg(&mut tmp, x);
        self.swap(x, &mut tmp);
        status
    }

    /// Fused multiply-accumulate: `dst = dst + a * b`.
    fn addmul(&self, dst: &mut Self::Elem, a: &Self::Elem, b: &Self::Elem) -> Status {
        let mut t = self.init();
        let mut status = self.mul(&mut t, a, b);
        status |= self.add_assign(dst, &t);
        status
    }

    /// Is `x` the additive identity?
    fn is_zero(&self, x: &Self::Elem) -> Truth;

    /// Is `x` the multiplicative identity?
    fn is_one(&self, x: &Self::Elem) -> Truth;

    /// Is `x` the negated multiplicative identity?
    fn is_neg_one(&self, x: &Self::Elem) -> Truth {
        let mut m1 = self.init();
        let mut status = self.one(&mut m1);
        status |= self.neg_assign(&mut m1);
        if !status.is_ok() {
            return Truth::Unknown;
        }
        self.equal(x, &m1)
    }

    /// Are `a` and `b` the same ring element?
    fn equal(&self, a: &Self::Elem, b: &Self::Elem) -> Truth;

    /// Sets `dst` to the ring image of a machine integer.
    fn set_i64(&self, dst: &mut Self::Elem, v: i64) -> Status {
        self.set_integer(dst, &IBig::from(v))
    }

    /// Sets `dst` to the ring image of an unsigned machine integer.
    fn set_u64(&self, dst: &mut Self::Elem, v: u64) -> Status {
        self.set_integer(dst, &IBig::from(v))
    }

    /// Sets `dst` to the ring image of an arbitrary-precision integer.
    fn set_integer(&self, dst: &mut Self::Elem, v: &IBig) -> Status;

    /// Sets `dst` to the ring image of a rational number.
    ///
    /// The default computes `num * den^-1` through the ring and reports
    /// `Domain` when the denominator has no inverse there.
    fn set_rational(&self, dst: &mut Self::Elem, v: &RBig) -> Status {
        let mut num = self.init();
        let mut den = self.init();
        let mut status = self.set_integer(&mut num, v.numerator());
        status |= self.set_integer(&mut den, &IBig::from(v.denominator().clone()));
        let mut den_inv = self.init();
        status |= self.inv(&mut den_inv, &den);
        if !status.is_ok() {
            return status;
        }
        status | self.mul(dst, &num, &den_inv)
    }

    /// Fills `dst` with a random element.
    ///
    /// Intended for tests and stress drivers; distributions are
    /// ring-specific and deliberately unspecified.
    fn random(&self, dst: &mut Self::Elem, rng: &mut dyn RngCore) -> Status;

    /// Renders an element.
    fn write_elem(&self, f: &mut fmt::Formatter<'_>, x: &Self::Elem) -> fmt::Result;

    /// Pivot preference between two candidate representations.
    ///
    /// `Less` means `a` is the preferable (simpler) pivot. Rings with a
    /// useful notion of representation size override this; the default
    /// considers all representations equally good.
    fn cmp_repr(&self, _a: &Self::Elem, _b: &Self::Elem) -> Ordering {
        Ordering::Equal
    }

    /// True when the ring is known to be finite.
    fn is_finite(&self) -> bool {
        false
    }

    /// Number of elements, when finite and representable.
    fn cardinality_bound(&self) -> Option<u128> {
        None
    }

    /// Adapts an element for use with `format!` and friends.
    fn display<'a>(&'a self, x: &'a Self::Elem) -> ElemDisplay<'a, Self>
    where
        Self: Sized,
    {
        ElemDisplay { ctx: self, elem: x }
    }
}

/// Borrowed (context, element) pair implementing [`fmt::Display`].
pub struct ElemDisplay<'a, R: RingContext> {
    ctx: &'a R,
    elem: &'a R::Elem,
}

impl<R: RingContext> fmt::Display for ElemDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ctx.write_elem(f, self.elem)
    }
}

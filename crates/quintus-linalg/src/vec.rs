//! Elementwise operations on vectors of generic ring elements.
//!
//! These are the building blocks for the matrix routines: every loop
//! over a row funnels through here. All functions combine per-element
//! statuses with `|=` and report the worst outcome across the whole
//! vector.
//!
//! Length agreement is asserted rather than reported: the matrix entry
//! points perform shape checking and translate mismatches into
//! `Status::Domain` before slices ever reach this module.

use quintus_rings::{RingContext, Status, Truth};
use rand::RngCore;

/// Allocates a vector of `len` fresh elements.
pub fn vec_init<R: RingContext>(ctx: &R, len: usize) -> Vec<R::Elem> {
    (0..len).map(|_| ctx.init()).collect()
}

/// Sets every entry to zero.
pub fn vec_zero<R: RingContext>(ctx: &R, dst: &mut [R::Elem]) -> Status {
    let mut status = Status::Ok;
    for x in dst {
        status |= ctx.zero(x);
    }
    status
}

/// Elementwise copy.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_set<R: RingContext>(ctx: &R, dst: &mut [R::Elem], src: &[R::Elem]) -> Status {
    assert_eq!(dst.len(), src.len());
    let mut status = Status::Ok;
    for (d, s) in dst.iter_mut().zip(src) {
        status |= ctx.set(d, s);
    }
    status
}

/// Entrywise exchange of two vectors.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_swap<R: RingContext>(ctx: &R, a: &mut [R::Elem], b: &mut [R::Elem]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        ctx.swap(x, y);
    }
}

/// Elementwise negation: `dst[i] = -src[i]`.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_neg<R: RingContext>(ctx: &R, dst: &mut [R::Elem], src: &[R::Elem]) -> Status {
    assert_eq!(dst.len(), src.len());
    let mut status = Status::Ok;
    for (d, s) in dst.iter_mut().zip(src) {
        status |= ctx.neg(d, s);
    }
    status
}

/// Elementwise sum: `dst[i] = a[i] + b[i]`.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_add<R: RingContext>(
    ctx: &R,
    dst: &mut [R::Elem],
    a: &[R::Elem],
    b: &[R::Elem],
) -> Status {
    assert_eq!(dst.len(), a.len());
    assert_eq!(dst.len(), b.len());
    let mut status = Status::Ok;
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        status |= ctx.add(d, x, y);
    }
    status
}

/// Elementwise difference: `dst[i] = a[i] - b[i]`.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_sub<R: RingContext>(
    ctx: &R,
    dst: &mut [R::Elem],
    a: &[R::Elem],
    b: &[R::Elem],
) -> Status {
    assert_eq!(dst.len(), a.len());
    assert_eq!(dst.len(), b.len());
    let mut status = Status::Ok;
    for ((d, x), y) in dst.iter_mut().zip(a).zip(b) {
        status |= ctx.sub(d, x, y);
    }
    status
}

/// Fused scale-and-accumulate: `dst[i] = dst[i] + src[i] * c`.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_scalar_addmul<R: RingContext>(
    ctx: &R,
    dst: &mut [R::Elem],
    src: &[R::Elem],
    c: &R::Elem,
) -> Status {
    assert_eq!(dst.len(), src.len());
    let mut status = Status::Ok;
    for (d, s) in dst.iter_mut().zip(src) {
        status |= ctx.addmul(d, s, c);
    }
    status
}

/// Dot product: `res = sum a[i] * b[i]`, zero when the vectors are empty.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_dot<R: RingContext>(
    ctx: &R,
    res: &mut R::Elem,
    a: &[R::Elem],
    b: &[R::Elem],
) -> Status {
    assert_eq!(a.len(), b.len());
    if a.is_empty() {
        return ctx.zero(res);
    }

    let mut status = ctx.mul(res, &a[0], &b[0]);
    let mut t = ctx.init();
    for (x, y) in a.iter().zip(b).skip(1) {
        status |= ctx.mul(&mut t, x, y);
        status |= ctx.add_assign(res, &t);
    }
    status
}

/// Tri-valued elementwise equality.
///
/// Short-circuits to definitely-false on the first element that
/// provably differs; an undecided element without such a falsification
/// makes the whole answer `Unknown`.
///
/// # Panics
///
/// Panics if the lengths differ.
pub fn vec_equal<R: RingContext>(ctx: &R, a: &[R::Elem], b: &[R::Elem]) -> Truth {
    assert_eq!(a.len(), b.len());
    let mut result = Truth::True;
    for (x, y) in a.iter().zip(b) {
        result = result.and(ctx.equal(x, y));
        if result.is_false() {
            break;
        }
    }
    result
}

/// Tri-valued "is every entry zero" test, with the same short-circuit
/// behavior as [`vec_equal`].
pub fn vec_is_zero<R: RingContext>(ctx: &R, a: &[R::Elem]) -> Truth {
    let mut result = Truth::True;
    for x in a {
        result = result.and(ctx.is_zero(x));
        if result.is_false() {
            break;
        }
    }
    result
}

/// Fills every entry with a random element.
pub fn vec_randomize<R: RingContext>(
    ctx: &R,
    dst: &mut [R::Elem],
    rng: &mut dyn RngCore,
) -> Status {
    let mut status = Status::Ok;
    for x in dst {
        status |= ctx.random(x, rng);
    }
    status
}

//! Dense matrices of generic ring elements.
//!
//! A [`Mat`] owns one flat row-major buffer plus a row-index table;
//! row `i` lives at `entries[rows[i] * ncols ..]`. Swapping two rows
//! exchanges indices only, so pivoting never moves ring elements, and
//! swapping two whole matrices exchanges the descriptor structs in
//! O(1).
//!
//! All arithmetic entry points are dimension-checked and report
//! [`Status::Domain`] on a shape mismatch; predicates are tri-valued
//! (see [`Truth`]).

use std::fmt;

use dashu::integer::IBig;
use dashu::rational::RBig;
use quintus_rings::{RingContext, Status, Truth};
use rand::RngCore;

use crate::vec;

/// A dense matrix over a generic ring.
///
/// The element type is opaque; every operation takes the ring context
/// that gives the elements their meaning. A matrix never owns its
/// context.
#[derive(Clone, Debug)]
pub struct Mat<T> {
    /// Backing store, `nrows * ncols` elements (empty when either
    /// dimension is zero).
    entries: Vec<T>,
    /// Row indirection: row `i` starts at `rows[i] * ncols`.
    rows: Vec<usize>,
    nrows: usize,
    ncols: usize,
}

impl<T> Mat<T> {
    /// Number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// True when either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    /// True when the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    fn row_start(&self, i: usize) -> usize {
        self.rows[i] * self.ncols
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        let start = self.row_start(i);
        &self.entries[start..start + self.ncols]
    }

    /// Returns row `i` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = self.row_start(i);
        let ncols = self.ncols;
        &mut self.entries[start..start + ncols]
    }

    /// Returns a reference to the entry at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn entry(&self, i: usize, j: usize) -> &T {
        assert!(j < self.ncols);
        &self.entries[self.row_start(i) + j]
    }

    /// Returns a mutable reference to the entry at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn entry_mut(&mut self, i: usize, j: usize) -> &mut T {
        assert!(j < self.ncols);
        let idx = self.row_start(i) + j;
        &mut self.entries[idx]
    }

    /// Exchanges rows `i` and `j` in O(1) by swapping row indices; no
    /// element is touched.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Exchanges full ownership of two matrices' storage in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Returns rows `i` and `j` as disjoint mutable slices.
    ///
    /// # Panics
    ///
    /// Panics if `i == j` or either index is out of bounds.
    pub fn two_rows_mut(&mut self, i: usize, j: usize) -> (&mut [T], &mut [T]) {
        assert_ne!(i, j);
        let oi = self.row_start(i);
        let oj = self.row_start(j);
        let c = self.ncols;
        if oi < oj {
            let (head, tail) = self.entries.split_at_mut(oj);
            (&mut head[oi..oi + c], &mut tail[..c])
        } else {
            let (head, tail) = self.entries.split_at_mut(oi);
            (&mut tail[..c], &mut head[oj..oj + c])
        }
    }
}

impl<T> Mat<T> {
    /// Allocates a `nrows x ncols` matrix of fresh (zero) elements.
    #[must_use]
    pub fn init<R: RingContext<Elem = T>>(nrows: usize, ncols: usize, ctx: &R) -> Self {
        Self {
            entries: vec::vec_init(ctx, nrows * ncols),
            rows: (0..nrows).collect(),
            nrows,
            ncols,
        }
    }

    /// Elementwise copy of `src` into `self`.
    ///
    /// Reports `Domain` if the shapes differ.
    pub fn set<R: RingContext<Elem = T>>(&mut self, src: &Self, ctx: &R) -> Status {
        if self.nrows != src.nrows || self.ncols != src.ncols {
            return Status::Domain;
        }

        let mut status = Status::Ok;
        for i in 0..self.nrows {
            status |= vec::vec_set(ctx, self.row_mut(i), src.row(i));
        }
        status
    }

    /// Sets every entry to zero.
    pub fn zero<R: RingContext<Elem = T>>(&mut self, ctx: &R) -> Status {
        let mut status = Status::Ok;
        for i in 0..self.nrows {
            status |= vec::vec_zero(ctx, self.row_mut(i));
        }
        status
    }

    /// Zeroes the matrix, then writes the image produced by `set_first`
    /// into `(0, 0)` and copies it along the diagonal.
    fn scalar_embed<R: RingContext<Elem = T>>(
        &mut self,
        ctx: &R,
        set_first: impl FnOnce(&mut T) -> Status,
    ) -> Status
    where
        T: Clone,
    {
        let mut status = self.zero(ctx);

        if self.nrows > 0 && self.ncols > 0 {
            status |= set_first(self.entry_mut(0, 0));

            for i in 1..self.nrows.min(self.ncols) {
                let v = self.entry(0, 0).clone();
                status |= ctx.set(self.entry_mut(i, i), &v);
            }
        }

        status
    }

    /// Sets `self` to the matrix image of a machine integer: the scalar
    /// on the diagonal (length `min(nrows, ncols)`), zero elsewhere.
    pub fn set_i64<R: RingContext<Elem = T>>(&mut self, v: i64, ctx: &R) -> Status
    where
        T: Clone,
    {
        self.scalar_embed(ctx, |e| ctx.set_i64(e, v))
    }

    /// Sets `self` to the matrix image of an unsigned machine integer.
    pub fn set_u64<R: RingContext<Elem = T>>(&mut self, v: u64, ctx: &R) -> Status
    where
        T: Clone,
    {
        self.scalar_embed(ctx, |e| ctx.set_u64(e, v))
    }

    /// Sets `self` to the matrix image of an arbitrary-precision integer.
    pub fn set_integer<R: RingContext<Elem = T>>(&mut self, v: &IBig, ctx: &R) -> Status
    where
        T: Clone,
    {
        self.scalar_embed(ctx, |e| ctx.set_integer(e, v))
    }

    /// Sets `self` to the matrix image of a rational number.
    pub fn set_rational<R: RingContext<Elem = T>>(&mut self, v: &RBig, ctx: &R) -> Status
    where
        T: Clone,
    {
        self.scalar_embed(ctx, |e| ctx.set_rational(e, v))
    }

    /// Sets `self` to the identity image of the ring's one.
    pub fn one<R: RingContext<Elem = T>>(&mut self, ctx: &R) -> Status
    where
        T: Clone,
    {
        self.set_i64(1, ctx)
    }

    /// Elementwise negation of `src` into `self`.
    ///
    /// Reports `Domain` if the shapes differ.
    pub fn neg<R: RingContext<Elem = T>>(&mut self, src: &Self, ctx: &R) -> Status {
        if self.nrows != src.nrows || self.ncols != src.ncols {
            return Status::Domain;
        }

        let mut status = Status::Ok;
        for i in 0..self.nrows {
            status |= vec::vec_neg(ctx, self.row_mut(i), src.row(i));
        }
        status
    }

    /// Elementwise sum `a + b` into `self`.
    ///
    /// Reports `Domain` if any shape differs.
    pub fn add<R: RingContext<Elem = T>>(&mut self, a: &Self, b: &Self, ctx: &R) -> Status {
        if self.nrows != a.nrows
            || self.ncols != a.ncols
            || self.nrows != b.nrows
            || self.ncols != b.ncols
        {
            return Status::Domain;
        }

        let mut status = Status::Ok;
        for i in 0..self.nrows {
            status |= vec::vec_add(ctx, self.row_mut(i), a.row(i), b.row(i));
        }
        status
    }

    /// Elementwise difference `a - b` into `self`.
    ///
    /// Reports `Domain` if any shape differs.
    pub fn sub<R: RingContext<Elem = T>>(&mut self, a: &Self, b: &Self, ctx: &R) -> Status {
        if self.nrows != a.nrows
            || self.ncols != a.ncols
            || self.nrows != b.nrows
            || self.ncols != b.ncols
        {
            return Status::Domain;
        }

        let mut status = Status::Ok;
        for i in 0..self.nrows {
            status |= vec::vec_sub(ctx, self.row_mut(i), a.row(i), b.row(i));
        }
        status
    }

    /// Entrywise exchange with another matrix of the same shape.
    ///
    /// Reports `Domain` if the shapes differ. Unlike [`Mat::swap`] this
    /// moves elements, which is what an aliasing-safe "swap the result
    /// into place" step needs.
    pub fn swap_entrywise<R: RingContext<Elem = T>>(&mut self, other: &mut Self, ctx: &R) -> Status {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Status::Domain;
        }

        for i in 0..self.nrows {
            let (a, b) = (self.row_start(i), other.row_start(i));
            let c = self.ncols;
            vec::vec_swap(
                ctx,
                &mut self.entries[a..a + c],
                &mut other.entries[b..b + c],
            );
        }
        Status::Ok
    }

    /// Tri-valued equality.
    ///
    /// A shape mismatch is a definite "not equal". Otherwise the answer
    /// is `True` only if every entry pair resolved definitely equal;
    /// one provably different pair short-circuits to `False`, and an
    /// undecided pair without such a falsification yields `Unknown`.
    #[must_use]
    pub fn equal<R: RingContext<Elem = T>>(&self, other: &Self, ctx: &R) -> Truth {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return Truth::False;
        }

        let mut result = Truth::True;
        for i in 0..self.nrows {
            result = result.and(vec::vec_equal(ctx, self.row(i), other.row(i)));
            if result.is_false() {
                break;
            }
        }
        result
    }

    /// Tri-valued "is every entry zero". Empty matrices are trivially
    /// zero.
    #[must_use]
    pub fn is_zero<R: RingContext<Elem = T>>(&self, ctx: &R) -> Truth {
        let mut result = Truth::True;
        for i in 0..self.nrows {
            result = result.and(vec::vec_is_zero(ctx, self.row(i)));
            if result.is_false() {
                break;
            }
        }
        result
    }

    /// Tri-valued "is this the identity image of one". Empty matrices
    /// are trivially one.
    #[must_use]
    pub fn is_one<R: RingContext<Elem = T>>(&self, ctx: &R) -> Truth {
        let mut result = Truth::True;
        'rows: for i in 0..self.nrows {
            for j in 0..self.ncols {
                let t = if i == j {
                    ctx.is_one(self.entry(i, j))
                } else {
                    ctx.is_zero(self.entry(i, j))
                };
                result = result.and(t);
                if result.is_false() {
                    break 'rows;
                }
            }
        }
        result
    }

    /// Tri-valued "is this the identity image of minus one".
    #[must_use]
    pub fn is_neg_one<R: RingContext<Elem = T>>(&self, ctx: &R) -> Truth {
        let mut result = Truth::True;
        'rows: for i in 0..self.nrows {
            for j in 0..self.ncols {
                let t = if i == j {
                    ctx.is_neg_one(self.entry(i, j))
                } else {
                    ctx.is_zero(self.entry(i, j))
                };
                result = result.and(t);
                if result.is_false() {
                    break 'rows;
                }
            }
        }
        result
    }

    /// Classical matrix product `a * b` into `self`.
    ///
    /// Reports `Domain` unless `a` is `m x k`, `b` is `k x n` and
    /// `self` is `m x n`. A shared dimension of zero yields the zero
    /// matrix; a shared dimension of one is a plain scalar product;
    /// otherwise `b` is transposed into scratch storage so each entry
    /// becomes a contiguous dot product.
    pub fn mul_classical<R: RingContext<Elem = T>>(&mut self, a: &Self, b: &Self, ctx: &R) -> Status {
        let (ar, ac) = (a.nrows, a.ncols);
        let (br, bc) = (b.nrows, b.ncols);

        if ac != br || self.nrows != ar || self.ncols != bc {
            return Status::Domain;
        }

        if br == 0 {
            return self.zero(ctx);
        }

        let mut status = Status::Ok;

        if br == 1 {
            for i in 0..ar {
                for j in 0..bc {
                    status |= ctx.mul(self.entry_mut(i, j), a.entry(i, 0), b.entry(0, j));
                }
            }
            return status;
        }

        // Column-major copy of b; dropped before returning on every path.
        let mut bt = vec::vec_init(ctx, br * bc);
        for i in 0..br {
            for j in 0..bc {
                status |= ctx.set(&mut bt[j * br + i], b.entry(i, j));
            }
        }

        for i in 0..ar {
            for j in 0..bc {
                status |= vec::vec_dot(ctx, self.entry_mut(i, j), a.row(i), &bt[j * br..(j + 1) * br]);
            }
        }

        status
    }

    /// In-place product `self = self * rhs`.
    ///
    /// The result shares storage with an operand, so it is computed
    /// into a temporary and swapped into place, never multiplied in
    /// place directly.
    pub fn mul_in_place<R: RingContext<Elem = T>>(&mut self, rhs: &Self, ctx: &R) -> Status {
        if self.ncols != rhs.nrows {
            return Status::Domain;
        }

        let mut tmp = Mat::init(self.nrows, rhs.ncols, ctx);
        let status = tmp.mul_classical(self, rhs, ctx);
        self.swap(&mut tmp);
        status
    }

    /// Fills every entry with a random element.
    pub fn randomize<R: RingContext<Elem = T>>(&mut self, rng: &mut dyn RngCore, ctx: &R) -> Status {
        let mut status = Status::Ok;
        for i in 0..self.nrows {
            status |= vec::vec_randomize(ctx, self.row_mut(i), rng);
        }
        status
    }

    /// Adapts the matrix for use with `format!` and friends, rendering
    /// nested bracketed rows.
    #[must_use]
    pub fn display<'a, R: RingContext<Elem = T>>(&'a self, ctx: &'a R) -> MatDisplay<'a, T, R> {
        MatDisplay { mat: self, ctx }
    }
}

/// Borrowed (matrix, context) pair implementing [`fmt::Display`].
pub struct MatDisplay<'a, T, R> {
    mat: &'a Mat<T>,
    ctx: &'a R,
}

impl<T, R: RingContext<Elem = T>> fmt::Display for MatDisplay<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.mat.nrows() {
            write!(f, "[")?;
            for j in 0..self.mat.ncols() {
                self.ctx.write_elem(f, self.mat.entry(i, j))?;
                if j + 1 < self.mat.ncols() {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if i + 1 < self.mat.nrows() {
                write!(f, ",\n ")?;
            }
        }
        write!(f, "]")
    }
}

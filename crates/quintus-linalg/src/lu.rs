//! Rank-revealing LU decomposition with three-valued pivoting.
//!
//! Row reduction over a generic ring has to cope with zero tests that
//! answer "unknown". The pivot search distinguishes three outcomes: a
//! pivot certainly exists, the column is certainly zero, or the answer
//! depends on an entry the ring cannot decide. In the last case the
//! whole reduction reports [`Status::Unable`] rather than guessing,
//! since a rank computed from an unverified pivot would be wrong with
//! positive probability.

use quintus_rings::{RingContext, Status, Truth};

use crate::mat::Mat;
use crate::vec;

/// Outcome of searching a column segment for a usable pivot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PivotSearch {
    /// A certainly nonzero entry was found in the given row.
    Found(usize),
    /// Every entry in the segment is certainly zero.
    ColumnZero,
    /// No entry is certainly nonzero, and at least one is undecided.
    Unable,
}

/// Searches rows `start_row..end_row` of `column` for a pivot.
///
/// Among the entries that are certainly nonzero, the one whose
/// representation the ring ranks simplest (via
/// [`RingContext::cmp_repr`]) wins; ties keep the earliest row.
/// Undecided entries never win, but their presence downgrades an
/// otherwise empty result from [`PivotSearch::ColumnZero`] to
/// [`PivotSearch::Unable`].
///
/// # Panics
///
/// Panics if the row range is empty or out of bounds.
#[must_use]
pub fn find_pivot<R: RingContext>(
    mat: &Mat<R::Elem>,
    start_row: usize,
    end_row: usize,
    column: usize,
    ctx: &R,
) -> PivotSearch {
    assert!(start_row < end_row);
    assert!(end_row <= mat.nrows());

    let mut best_row = None;
    let mut unknown = false;

    for i in start_row..end_row {
        match ctx.is_zero(mat.entry(i, column)) {
            Truth::False => {
                let better = match best_row {
                    None => true,
                    Some(b) => {
                        ctx.cmp_repr(mat.entry(i, column), mat.entry(b, column)).is_lt()
                    }
                };
                if better {
                    best_row = Some(i);
                }
            }
            Truth::True => {}
            Truth::Unknown => unknown = true,
        }
    }

    match best_row {
        Some(row) => PivotSearch::Found(row),
        None if unknown => PivotSearch::Unable,
        None => PivotSearch::ColumnZero,
    }
}

/// Result of an LU reduction.
///
/// `perm` records the row permutation as a map from reduced row index
/// to original row index; it starts as the identity and mirrors every
/// row swap applied to the working matrix. When `status` is not
/// [`Status::Ok`] the rank is not meaningful.
#[derive(Clone, Debug)]
pub struct LuDecomposition {
    /// Number of pivots found.
    pub rank: usize,
    /// Row permutation applied during reduction.
    pub perm: Vec<usize>,
    /// Worst status encountered.
    pub status: Status,
}

/// Computes an in-place fraction-free-style LU reduction of `a` into
/// `lu` by Gaussian elimination with three-valued pivoting.
///
/// On success `lu` holds the eliminated matrix with the multipliers
/// stored below the diagonal in the columns of the pivots found so far,
/// and the returned permutation maps reduced rows back to rows of `a`.
///
/// With `full_rank_check` set, the caller only wants to know whether
/// the matrix has full rank; the reduction then stops at the first
/// certainly-zero column and reports rank 0 without inspecting the
/// remaining entries.
///
/// Reports `Domain` when a pivot certified nonzero turns out to have no
/// inverse in the ring, and `Unable` when an undecided zero test blocks
/// the pivot search or any element operation cannot complete.
pub fn lu_classical<R: RingContext>(
    lu: &mut Mat<R::Elem>,
    a: &Mat<R::Elem>,
    full_rank_check: bool,
    ctx: &R,
) -> LuDecomposition {
    let m = a.nrows();
    let n = a.ncols();

    let mut perm: Vec<usize> = (0..m).collect();

    if a.is_empty() {
        return LuDecomposition {
            rank: 0,
            perm,
            status: Status::Ok,
        };
    }

    let mut status = lu.set(a, ctx);
    if !status.is_ok() {
        return LuDecomposition {
            rank: 0,
            perm,
            status,
        };
    }

    let mut rank = 0;
    let mut row = 0;
    let mut col = 0;

    let mut d = ctx.init();
    let mut e = ctx.init();

    while row < m && col < n {
        let r = match find_pivot(lu, row, m, col, ctx) {
            // The rank cannot be determined past an undecided column.
            PivotSearch::Unable => {
                status |= Status::Unable;
                break;
            }
            PivotSearch::ColumnZero => {
                // The matrix is proved rank-deficient, which is all a
                // full-rank check needs to know.
                if full_rank_check {
                    rank = 0;
                    break;
                }
                col += 1;
                continue;
            }
            PivotSearch::Found(r) => r,
        };

        rank += 1;

        if r != row {
            lu.swap_rows(row, r);
            perm.swap(row, r);
        }

        // A pivot certified nonzero must still be a unit to eliminate with.
        status |= ctx.inv(&mut d, lu.entry(row, col));
        if !status.is_ok() {
            break;
        }

        for j in row + 1..m {
            status |= ctx.mul(&mut e, lu.entry(j, col), &d);
            status |= ctx.neg_assign(&mut e);

            let (pivot_row, target_row) = lu.two_rows_mut(row, j);
            status |= vec::vec_scalar_addmul(
                ctx,
                &mut target_row[col + 1..],
                &pivot_row[col + 1..],
                &e,
            );

            status |= ctx.zero(&mut target_row[col]);
            status |= ctx.neg(&mut target_row[rank - 1], &e);
        }

        row += 1;
        col += 1;
    }

    LuDecomposition { rank, perm, status }
}

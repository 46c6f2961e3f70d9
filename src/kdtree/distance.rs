//! Euclidean distance helpers shared by insertion, lookup and nearest-neighbor search.

use crate::error::{KDIndexError, Result};
use crate::r#type::IndexableNum;

/// Squared Euclidean distance between two points of equal length.
#[inline]
pub fn sq_euclidean<N: IndexableNum>(a: &[N], b: &[N]) -> N {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(N::zero(), |sum, (&x, &y)| {
        let d = x - y;
        sum + d * d
    })
}

/// Euclidean distance between two points of equal length.
///
/// ```
/// use kd_index::kdtree::distance::euclidean;
///
/// assert_eq!(euclidean(&[0., 0.], &[3., 4.]), 5.);
/// ```
#[inline]
pub fn euclidean<N: IndexableNum>(a: &[N], b: &[N]) -> N {
    sq_euclidean(a, b).sqrt()
}

/// 1D distance from `point` to the splitting hyperplane through `pivot` along `axis`.
///
/// This is a lower bound on the distance from `point` to anything on the other side of the
/// hyperplane.
#[inline]
pub fn plane_distance<N: IndexableNum>(point: &[N], pivot: &[N], axis: usize) -> N {
    (point[axis] - pivot[axis]).abs()
}

/// Which child a point descends into at a node splitting on `axis`.
///
/// Strictly smaller coordinates go left (`0`); everything else, equality included, goes right
/// (`1`).
#[inline]
pub(crate) fn branch<N: IndexableNum>(point: &[N], pivot: &[N], axis: usize) -> usize {
    if point[axis] < pivot[axis] {
        LEFT
    } else {
        RIGHT
    }
}

pub(crate) const LEFT: usize = 0;
pub(crate) const RIGHT: usize = 1;

/// Check that `point` has exactly `dims` coordinates.
#[inline]
pub(crate) fn check_dims<N>(dims: usize, point: &[N]) -> Result<()> {
    if point.len() != dims {
        return Err(KDIndexError::DimensionMismatch {
            expected: dims,
            actual: point.len(),
        });
    }
    Ok(())
}

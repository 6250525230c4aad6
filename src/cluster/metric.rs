//! Distance metrics.
//!
//! A metric compares two points of equal dimensionality and yields a value that
//! can be ordered. The engine only ever asks "which centroid is nearest", so the
//! value needs `PartialOrd` and nothing else.

use super::point::Point;
use crate::error::{Error, Result};

/// Dissimilarity between two points of equal dimensionality.
///
/// Any `Fn(&Point, &Point) -> Result<D>` is a metric, so a closure can be
/// injected directly:
///
/// ```rust
/// use lloyd::{Kmeans, Point, Result};
///
/// let manhattan = |p: &Point, q: &Point| -> Result<f64> {
///     Ok(p.iter().zip(q.iter()).map(|(a, b)| (a - b).abs()).sum())
/// };
/// let mut km = Kmeans::with_metric(manhattan);
/// km.add_data([[0, 0], [1, 1], [9, 9]]);
/// km.add_centroid([0, 0]);
/// km.add_centroid([9, 9]);
/// km.start().unwrap();
/// assert_eq!(km.find_cluster([1, 1]).unwrap(), &Point::from([0, 0]));
/// ```
pub trait Metric {
    /// The comparable value produced by [`Metric::distance`].
    type Output: PartialOrd;

    /// Compare `p` to `q`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the points differ in length.
    fn distance(&self, p: &Point, q: &Point) -> Result<Self::Output>;
}

impl<F, D> Metric for F
where
    F: Fn(&Point, &Point) -> Result<D>,
    D: PartialOrd,
{
    type Output = D;

    fn distance(&self, p: &Point, q: &Point) -> Result<D> {
        self(p, q)
    }
}

/// Squared Euclidean distance, the default metric.
///
/// Not square-rooted: ordering is all that nearest-centroid search needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl Metric for SquaredEuclidean {
    type Output = f64;

    #[inline]
    fn distance(&self, p: &Point, q: &Point) -> Result<f64> {
        distance(p, q)
    }
}

/// Squared Euclidean distance between `p` and `q`.
///
/// ```rust
/// use lloyd::{distance, Error, Point};
///
/// assert_eq!(distance(&Point::from([1, 2]), &Point::from([4, 6])), Ok(25.0));
/// assert_eq!(
///     distance(&Point::from([1, 2]), &Point::from([1, 2, 3])),
///     Err(Error::DimensionMismatch { expected: 2, found: 3 })
/// );
/// ```
pub fn distance(p: &Point, q: &Point) -> Result<f64> {
    if p.dim() != q.dim() {
        return Err(Error::DimensionMismatch {
            expected: p.dim(),
            found: q.dim(),
        });
    }
    Ok(p.iter()
        .zip(q.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum())
}

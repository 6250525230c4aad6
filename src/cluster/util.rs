use super::point::Point;
use crate::error::{Error, Result};

/// Position of the element minimizing `f`.
///
/// Scans in iteration order and only moves on a strictly smaller value, so the
/// first minimal element wins ties.
///
/// ```rust
/// use lloyd::{argmin, Error};
///
/// assert_eq!(argmin([3, -1, 2], |x| x), Ok(1));
/// assert_eq!(argmin([3, 1, -1], |x: i32| x * x), Ok(1));
/// assert_eq!(argmin(Vec::<i32>::new(), |x| x), Err(Error::EmptySequence));
/// ```
pub fn argmin<I, F, V>(items: I, mut f: F) -> Result<usize>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> V,
    V: PartialOrd,
{
    try_argmin(items, |x| Ok(f(x)))
}

/// Fallible [`argmin`]: the first error returned by `f` aborts the scan.
pub fn try_argmin<I, F, V>(items: I, mut f: F) -> Result<usize>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<V>,
    V: PartialOrd,
{
    let mut it = items.into_iter();
    let first = it.next().ok_or(Error::EmptySequence)?;

    let mut best_val = f(first)?;
    let mut best = 0;
    for (pos, item) in it.enumerate() {
        let v = f(item)?;
        if v < best_val {
            best_val = v;
            best = pos + 1;
        }
    }
    Ok(best)
}

/// Component-wise arithmetic mean.
///
/// Shorter points are zero-padded to the longest one. Returns `None` for an empty
/// slice.
pub(crate) fn mean(points: &[&Point]) -> Option<Point> {
    let dim = points.iter().map(|p| p.dim()).max()?;
    let mut acc = vec![0.0f64; dim];
    for p in points {
        for (slot, x) in acc.iter_mut().zip(p.iter()) {
            *slot += x;
        }
    }
    let n = points.len() as f64;
    for slot in &mut acc {
        *slot /= n;
    }
    Some(Point::new(acc))
}

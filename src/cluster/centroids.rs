//! Seed centroid management.

use super::point::{Point, SampleSet};
use crate::error::{Error, Result};
use rand::Rng;

/// Ordered, deduplicated list of centroids.
///
/// Index `i` names cluster `i` for the lifetime of a run.
#[derive(Clone, Debug, Default)]
pub struct CentroidSet {
    centroids: Vec<Point>,
}

impl CentroidSet {
    /// Create an empty centroid list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a centroid unless a value-equal one is already present.
    ///
    /// Returns `true` if the centroid was added.
    pub fn add(&mut self, centroid: Point) -> bool {
        if self.centroids.contains(&centroid) {
            return false;
        }
        self.centroids.push(centroid);
        true
    }

    /// Replace the whole list with `k` distinct samples drawn uniformly at random.
    ///
    /// Fails with [`Error::InsufficientData`] if `samples` has fewer than `k`
    /// points, leaving the current list untouched.
    pub fn sample<R: Rng + ?Sized>(
        &mut self,
        samples: &SampleSet,
        k: usize,
        rng: &mut R,
    ) -> Result<()> {
        if samples.len() < k {
            return Err(Error::InsufficientData {
                requested: k,
                available: samples.len(),
            });
        }

        let picks = rand::seq::index::sample(rng, samples.len(), k).into_vec();
        log::trace!("seeding {} centroids from samples {:?}", k, picks);

        let pool = samples.as_slice();
        self.centroids = picks.into_iter().map(|i| pool[i].clone()).collect();
        Ok(())
    }

    /// Replace the list wholesale.
    pub(crate) fn replace(&mut self, centroids: Vec<Point>) {
        self.centroids = centroids;
    }

    /// Discard every centroid.
    pub fn clear(&mut self) {
        self.centroids.clear();
    }

    /// Number of centroids (`k`).
    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    /// Whether no centroid is defined.
    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// Centroid of cluster `idx`.
    pub fn get(&self, idx: usize) -> Option<&Point> {
        self.centroids.get(idx)
    }

    /// The centroids in index order.
    pub fn as_slice(&self) -> &[Point] {
        &self.centroids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn samples(n: i32) -> SampleSet {
        let mut set = SampleSet::new();
        for i in 0..n {
            set.insert(Point::from([i, i * i]));
        }
        set
    }

    #[test]
    fn test_add_dedups() {
        let mut c = CentroidSet::new();
        assert!(c.add(Point::from([2, 1])));
        assert!(c.add(Point::from([4, 4])));
        assert!(!c.add(Point::from([2.0, 1.0])));
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(1), Some(&Point::from([4, 4])));
    }

    #[test]
    fn test_sample_distinct_members() {
        let pool = samples(10);
        let mut c = CentroidSet::new();
        c.add(Point::from([100, 100]));

        let mut rng = StdRng::seed_from_u64(42);
        c.sample(&pool, 4, &mut rng).unwrap();

        assert_eq!(c.len(), 4);
        let unique: HashSet<&Point> = c.as_slice().iter().collect();
        assert_eq!(unique.len(), 4);
        for p in c.as_slice() {
            assert!(pool.contains(p));
        }
    }

    #[test]
    fn test_sample_reproducible_with_seed() {
        let pool = samples(20);
        let mut a = CentroidSet::new();
        let mut b = CentroidSet::new();
        a.sample(&pool, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        b.sample(&pool, 5, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_sample_insufficient_data() {
        let pool = samples(3);
        let mut c = CentroidSet::new();
        c.add(Point::from(1));

        let err = c.sample(&pool, 5, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientData {
                requested: 5,
                available: 3
            }
        );
        assert_eq!(c.as_slice(), &[Point::from(1)]);
    }

    #[test]
    fn test_sample_all_points() {
        let pool = samples(3);
        let mut c = CentroidSet::new();
        c.sample(&pool, 3, &mut StdRng::seed_from_u64(1)).unwrap();
        let got: HashSet<&Point> = c.as_slice().iter().collect();
        let want: HashSet<&Point> = pool.iter().collect();
        assert_eq!(got, want);
    }
}

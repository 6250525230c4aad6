//! One-shot k-means fitting on top of the step-by-step engine.

use super::kmeans::{Kmeans, RunStats};
use super::metric::{Metric, SquaredEuclidean};
use super::point::Point;
use super::traits::Clustering;
use crate::error::{Error, Result};

/// K-means configuration: random seeding from the data, then Lloyd iterations.
///
/// ```rust
/// use lloyd::{Clustering, Lloyd, Point};
///
/// let data: Vec<Point> = vec![
///     Point::from([0.0, 0.0]),
///     Point::from([0.1, 0.1]),
///     Point::from([10.0, 10.0]),
///     Point::from([10.1, 10.1]),
/// ];
///
/// let labels = Lloyd::new(2).with_seed(42).fit_predict(&data).unwrap();
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[0], labels[2]);
/// ```
#[derive(Clone, Debug)]
pub struct Lloyd<M = SquaredEuclidean> {
    k: usize,
    max_iter: Option<usize>,
    seed: Option<u64>,
    metric: M,
}

/// Result of [`Lloyd::fit`].
#[derive(Clone, Debug, PartialEq)]
pub struct KmeansFit {
    /// Final centroids, indexed by cluster label.
    pub centroids: Vec<Point>,
    /// One label per input point, in input order.
    pub labels: Vec<usize>,
    /// How the run ended.
    pub stats: RunStats,
}

impl Lloyd<SquaredEuclidean> {
    /// `k` clusters, at most 100 steps, unseeded.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: Some(100),
            seed: None,
            metric: SquaredEuclidean,
        }
    }
}

impl<M: Metric + Clone> Lloyd<M> {
    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Cap the number of steps.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }

    /// Step until convergence, with no cap.
    pub fn until_converged(mut self) -> Self {
        self.max_iter = None;
        self
    }

    /// Seed the centroid sampling for reproducible fits.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a different distance metric.
    pub fn with_metric<N: Metric + Clone>(self, metric: N) -> Lloyd<N> {
        Lloyd {
            k: self.k,
            max_iter: self.max_iter,
            seed: self.seed,
            metric,
        }
    }

    /// Cluster `data`, returning centroids and per-point labels.
    pub fn fit(&self, data: &[Point]) -> Result<KmeansFit> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }

        let mut engine = Kmeans::with_metric(self.metric.clone());
        engine.add_data(data);
        match self.seed {
            Some(seed) => engine.random_centroids_seeded(self.k, seed)?,
            None => engine.random_centroids(self.k, &mut rand::rng())?,
        }

        let stats = engine.run(self.max_iter)?;
        let labels = data
            .iter()
            .map(|p| engine.predict(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(KmeansFit {
            centroids: engine.centroids().to_vec(),
            labels,
            stats,
        })
    }
}

impl<M: Metric + Clone> Clustering for Lloyd<M> {
    fn fit_predict(&self, data: &[Point]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

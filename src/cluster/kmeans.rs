//! The step-by-step k-means engine.
//!
//! A [`Kmeans`] value owns a sample set, a centroid list and the current cluster
//! membership. It follows a three-call protocol:
//!
//! - [`Kmeans::start`] assigns every sample to its nearest centroid (once per run).
//! - [`Kmeans::step`] recomputes centroids as member means and moves points.
//! - [`Kmeans::run`] does `start` and then `step` until nothing moves or a budget
//!   is spent.
//!
//! Membership is stored as one optional label per sample, in sample insertion
//! order. A sample belongs to at most one cluster by construction, and the
//! materialized clusters come out in a deterministic order.

use super::centroids::CentroidSet;
use super::metric::{Metric, SquaredEuclidean};
use super::point::{Point, SampleSet};
use super::util::{self, try_argmin};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lifecycle of a [`Kmeans`] engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// No centroids are defined.
    Empty,
    /// At least one centroid, but not every sample is assigned.
    Ready,
    /// Every sample belongs to exactly one cluster.
    Partitioned,
}

/// Summary of a call to [`Kmeans::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of `step` calls made.
    pub steps: usize,
    /// Total points moved across all steps.
    pub moves: usize,
    /// Whether the last step moved nothing.
    pub converged: bool,
}

/// A centroid together with its member points.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster<'a> {
    /// Representative point of the cluster.
    pub centroid: &'a Point,
    /// Members, in sample insertion order.
    pub members: Vec<&'a Point>,
}

/// Lloyd's k-means engine.
///
/// ```rust
/// use lloyd::{Kmeans, Point};
///
/// let mut km = Kmeans::new();
/// km.add_data([[0, 0], [1, 0], [10, 10], [11, 10]]);
/// km.add_centroid([0, 0]);
/// km.add_centroid([1, 0]);
///
/// let stats = km.run(None).unwrap();
/// assert!(stats.converged);
///
/// let clusters = km.clusters();
/// assert_eq!(clusters[0].centroid, &Point::from([0.5, 0.0]));
/// assert_eq!(clusters[1].centroid, &Point::from([10.5, 10.0]));
/// ```
#[derive(Clone, Debug)]
pub struct Kmeans<M = SquaredEuclidean> {
    metric: M,
    samples: SampleSet,
    centroids: CentroidSet,
    labels: Vec<Option<usize>>,
    partitioned: bool,
}

impl Kmeans<SquaredEuclidean> {
    /// Create an empty engine using squared Euclidean distance.
    pub fn new() -> Self {
        Self::with_metric(SquaredEuclidean)
    }
}

impl Default for Kmeans<SquaredEuclidean> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric> Kmeans<M> {
    /// Create an empty engine using `metric` to compare points with centroids.
    pub fn with_metric(metric: M) -> Self {
        Self {
            metric,
            samples: SampleSet::new(),
            centroids: CentroidSet::new(),
            labels: Vec::new(),
            partitioned: false,
        }
    }

    /// The distance metric in use.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Add sample points, returning how many were not already present.
    ///
    /// Points added after [`Kmeans::start`] stay unassigned until the next start.
    pub fn add_data<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut added = 0;
        for p in points {
            let (_, new) = self.samples.insert(p.into());
            if new {
                self.labels.push(None);
                added += 1;
            }
        }
        added
    }

    /// Add a seed centroid. It is not added to the sample set.
    ///
    /// Returns `false` if a value-equal centroid already exists.
    pub fn add_centroid(&mut self, centroid: impl Into<Point>) -> bool {
        self.centroids.add(centroid.into())
    }

    /// Replace the centroids with `k` distinct samples chosen uniformly at random.
    ///
    /// Membership is reset to `k` empty clusters.
    pub fn random_centroids<R: Rng + ?Sized>(&mut self, k: usize, rng: &mut R) -> Result<()> {
        self.centroids.sample(&self.samples, k, rng)?;
        self.reset_clusters();
        Ok(())
    }

    /// [`Kmeans::random_centroids`] with a seeded [`StdRng`].
    pub fn random_centroids_seeded(&mut self, k: usize, seed: u64) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.random_centroids(k, &mut rng)
    }

    /// Empty every cluster, keeping the centroids.
    pub fn reset_clusters(&mut self) {
        self.labels.fill(None);
        self.partitioned = false;
    }

    /// Discard the centroids. Membership goes with them.
    pub fn reset_centroids(&mut self) {
        self.centroids.clear();
        self.reset_clusters();
    }

    /// Discard samples, centroids and clusters.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.centroids.clear();
        self.labels.clear();
        self.partitioned = false;
    }

    /// Assign every sample to its nearest centroid.
    pub fn start(&mut self) -> Result<()> {
        if self.centroids.is_empty() {
            return Err(Error::NoCentroidsDefined);
        }

        if self.samples.is_empty() {
            log::debug!("start: no samples to assign");
        }

        let centroids = self.centroids.as_slice();
        let labels = self
            .samples
            .iter()
            .map(|p| nearest(&self.metric, centroids, p).map(Some))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "start: assigned {} points to {} centroids",
            labels.len(),
            centroids.len()
        );
        self.labels = labels;
        self.partitioned = true;
        Ok(())
    }

    /// Recompute centroids and move points to their new nearest centroid.
    ///
    /// Returns the number of points that changed cluster; `0` is a fixed point.
    /// Clusters without members keep their centroid. Unassigned samples are
    /// ignored.
    pub fn step(&mut self) -> Result<usize> {
        let k = self.centroids.len();
        let mut members: Vec<Vec<&Point>> = vec![Vec::new(); k];
        for (p, label) in self.samples.iter().zip(&self.labels) {
            if let Some(c) = *label {
                members[c].push(p);
            }
        }

        let centroids: Vec<Point> = members
            .iter()
            .zip(self.centroids.as_slice())
            .enumerate()
            .map(|(c, (pts, old))| match util::mean(pts) {
                Some(m) => {
                    log::trace!("cluster {c}: {} members, centroid {old} -> {m}", pts.len());
                    m
                }
                None => old.clone(),
            })
            .collect();

        // Every point is judged against the same recomputed centroids.
        let mut labels = self.labels.clone();
        let mut moves = 0;
        for (p, label) in self.samples.iter().zip(labels.iter_mut()) {
            let Some(current) = *label else {
                continue;
            };
            let next = nearest(&self.metric, &centroids, p)?;
            if next != current {
                *label = Some(next);
                moves += 1;
            }
        }

        log::debug!("step: moved {moves} points");
        self.centroids.replace(centroids);
        self.labels = labels;
        Ok(moves)
    }

    /// Start a run and step until nothing moves.
    ///
    /// `max` caps the number of steps: `None` is unbounded, `Some(0)` only
    /// starts. If any step fails, centroids and membership are restored to
    /// what they were before the call.
    pub fn run(&mut self, max: Option<usize>) -> Result<RunStats> {
        let centroids = self.centroids.as_slice().to_vec();
        let labels = self.labels.clone();
        let partitioned = self.partitioned;

        match self.run_steps(max) {
            Ok(stats) => Ok(stats),
            Err(err) => {
                log::debug!("run: failed ({err}), restoring previous state");
                self.centroids.replace(centroids);
                self.labels = labels;
                self.partitioned = partitioned;
                Err(err)
            }
        }
    }

    fn run_steps(&mut self, max: Option<usize>) -> Result<RunStats> {
        self.start()?;

        let mut stats = RunStats::default();
        while !matches!(max, Some(m) if stats.steps >= m) {
            let moved = self.step()?;
            stats.steps += 1;
            stats.moves += moved;
            if moved == 0 {
                stats.converged = true;
                break;
            }
        }

        if stats.converged {
            log::debug!(
                "run: converged after {} steps ({} moves)",
                stats.steps,
                stats.moves
            );
        } else {
            log::debug!("run: stopped after {} steps without converging", stats.steps);
        }
        Ok(stats)
    }

    /// Centroid nearest to `point`, without adding it to the sample set.
    ///
    /// A sample that is already a cluster member reports its own cluster's
    /// centroid.
    pub fn find_cluster(&self, point: impl Into<Point>) -> Result<&Point> {
        let idx = self.predict(point)?;
        self.centroids.get(idx).ok_or(Error::EmptySequence)
    }

    /// Index of the cluster [`Kmeans::find_cluster`] would report.
    pub fn predict(&self, point: impl Into<Point>) -> Result<usize> {
        let point = point.into();
        if let Some(Some(c)) = self.samples.position(&point).map(|pos| self.labels[pos]) {
            return Ok(c);
        }
        nearest(&self.metric, self.centroids.as_slice(), &point)
    }

    /// Every centroid with its members, in centroid order.
    pub fn clusters(&self) -> Vec<Cluster<'_>> {
        let mut out: Vec<Cluster<'_>> = self
            .centroids
            .as_slice()
            .iter()
            .map(|centroid| Cluster {
                centroid,
                members: Vec::new(),
            })
            .collect();
        for (p, label) in self.samples.iter().zip(&self.labels) {
            if let Some(c) = *label {
                out[c].members.push(p);
            }
        }
        out
    }

    /// The sample set, in insertion order.
    pub fn data(&self) -> &[Point] {
        self.samples.as_slice()
    }

    /// The current centroids.
    pub fn centroids(&self) -> &[Point] {
        self.centroids.as_slice()
    }

    /// Cluster label of each sample, parallel to [`Kmeans::data`].
    pub fn labels(&self) -> &[Option<usize>] {
        &self.labels
    }

    /// Number of distinct samples.
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    /// Number of centroids.
    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        if self.centroids.is_empty() {
            State::Empty
        } else if self.partitioned && self.labels.iter().all(Option::is_some) {
            State::Partitioned
        } else {
            State::Ready
        }
    }
}

impl<M: Metric<Output = f64>> Kmeans<M> {
    /// Sum of distances from each assigned sample to its centroid.
    ///
    /// With the default metric this is the within-cluster sum of squares.
    pub fn inertia(&self) -> Result<f64> {
        let centroids = self.centroids.as_slice();
        let mut total = 0.0;
        for (p, label) in self.samples.iter().zip(&self.labels) {
            if let Some(c) = *label {
                total += self.metric.distance(p, &centroids[c])?;
            }
        }
        Ok(total)
    }
}

fn nearest<M: Metric>(metric: &M, centroids: &[Point], p: &Point) -> Result<usize> {
    try_argmin(centroids, |c| metric.distance(p, c))
}

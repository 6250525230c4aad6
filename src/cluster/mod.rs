//! Lloyd's k-means clustering.
//!
//! ## The algorithm
//!
//! Pick k centroids. Assign each point to its nearest centroid, then move every
//! centroid to the mean of the points assigned to it. Repeat until a full pass
//! moves no point.
//!
//! **Objective** (with the default metric): minimize the within-cluster sum of
//! squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! Neither phase can increase J, so with squared Euclidean distance the
//! iteration reaches a fixed point after finitely many steps. The fixed point is
//! a local minimum and depends on the seeds.
//!
//! ## Pieces
//!
//! - [`Point`] and [`SampleSet`]: the canonical point type and the deduplicated,
//!   insertion-ordered sample store.
//! - [`Metric`]: pluggable dissimilarity; [`SquaredEuclidean`] by default.
//! - [`argmin`]: first-seen minimum, which fixes how ties between centroids break.
//! - [`CentroidSet`]: hand-picked or randomly sampled seeds.
//! - [`Kmeans`]: the `start` / `step` / `run` engine.
//! - [`Lloyd`]: one-shot fitting behind the [`Clustering`] trait.
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Kmeans, Point, State};
//!
//! let mut km = Kmeans::new();
//! km.add_data([[0, 7], [2, 1], [4, 4], [8, 1], [40, 7], [40, 20]]);
//! km.add_centroid([2, 1]);
//! km.add_centroid([40, 7]);
//!
//! km.start().unwrap();
//! assert_eq!(km.state(), State::Partitioned);
//! while km.step().unwrap() != 0 {}
//!
//! let clusters = km.clusters();
//! assert_eq!(clusters[0].members.len(), 4);
//! assert_eq!(clusters[1].centroid, &Point::from([40.0, 13.5]));
//! ```

mod centroids;
mod kmeans;
mod lloyd;
mod metric;
mod point;
mod traits;
mod util;

pub use centroids::CentroidSet;
pub use kmeans::{Cluster, Kmeans, RunStats, State};
pub use lloyd::{KmeansFit, Lloyd};
pub use metric::{distance, Metric, SquaredEuclidean};
pub use point::{Component, Point, SampleSet};
pub use traits::Clustering;
pub use util::{argmin, try_argmin};

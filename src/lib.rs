//! Lloyd's k-means clustering.
//!
//! `lloyd` partitions fixed-dimensionality points into k clusters, each
//! represented by a centroid. The primary API is under [`cluster`]:
//!
//! - [`Kmeans`]: a stateful engine with an explicit `start` / `step` / `run`
//!   protocol, hand-picked or random seeds, and a pluggable [`Metric`]
//! - [`Lloyd`]: one-shot fitting through the [`Clustering`] trait
//! - [`distance`] and [`argmin`]: the standalone building blocks

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    argmin, distance, try_argmin, CentroidSet, Cluster, Clustering, Component, Kmeans, KmeansFit,
    Lloyd, Metric, Point, RunStats, SampleSet, SquaredEuclidean, State,
};
pub use error::{Error, Result};

use lloyd::{distance, Error, Kmeans, Point, State};
use std::collections::HashSet;

fn sample_engine() -> Kmeans {
    let mut km = Kmeans::new();
    km.add_data([
        [0, 7],
        [2, 1],
        [4, 4],
        [8, 1],
        [16, 15],
        [20, 8],
        [23, 12],
        [40, 7],
        [40, 20],
        [47, 16],
        [47, 23],
    ]);
    km.add_centroid([2, 1]);
    km.add_centroid([4, 4]);
    km.add_centroid([23, 12]);
    km
}

#[test]
fn test_start_seeds_nearest_clusters() {
    let mut km = sample_engine();
    km.start().unwrap();

    assert_eq!(km.find_cluster([0, 7]).unwrap(), &Point::from([4, 4]));
    assert_eq!(km.find_cluster([2, 1]).unwrap(), &Point::from([2, 1]));
    assert_eq!(km.find_cluster([47, 23]).unwrap(), &Point::from([23, 12]));
}

#[test]
fn test_run_yields_full_partition() {
    let mut km = sample_engine();
    let stats = km.run(None).unwrap();
    assert!(stats.converged);
    assert_eq!(km.state(), State::Partitioned);

    let clusters = km.clusters();
    assert_eq!(clusters.len(), 3);

    let mut seen = HashSet::new();
    let mut count = 0;
    for cluster in &clusters {
        for p in &cluster.members {
            seen.insert((*p).clone());
            count += 1;
        }
    }
    assert_eq!(count, 11);
    let all: HashSet<Point> = km.data().iter().cloned().collect();
    assert_eq!(seen, all);

    // Converged: a further step is a no-op.
    assert_eq!(km.step().unwrap(), 0);
}

#[test]
fn test_snapshot_presents_scalars_bare() {
    let mut km = Kmeans::new();
    km.add_data([3, 1, 3]);
    km.add_data([[5]]);

    let shown: Vec<String> = km.data().iter().map(ToString::to_string).collect();
    assert_eq!(shown, ["3", "1", "5"]);
}

#[test]
fn test_precondition_errors() {
    assert_eq!(
        distance(&Point::from([1, 2]), &Point::from([1, 2, 3])),
        Err(Error::DimensionMismatch {
            expected: 2,
            found: 3
        })
    );

    let mut km = Kmeans::new();
    km.add_data([1, 2, 3]);
    assert_eq!(km.start(), Err(Error::NoCentroidsDefined));
    assert_eq!(
        km.random_centroids_seeded(5, 0),
        Err(Error::InsufficientData {
            requested: 5,
            available: 3
        })
    );
    assert_eq!(km.state(), State::Empty);
}

#[test]
fn test_reset_and_rerun_with_random_seeds() {
    let mut km = sample_engine();
    km.run(None).unwrap();

    km.reset_centroids();
    assert_eq!(km.state(), State::Empty);
    assert!(km.labels().iter().all(Option::is_none));

    let mut rng = rand::rng();
    km.random_centroids(4, &mut rng).unwrap();
    let stats = km.run(None).unwrap();
    assert!(stats.converged);
    assert_eq!(km.clusters().len(), 4);
    assert_eq!(km.n_samples(), 11);
}

//! Step-by-step k-means on a small 2D dataset.
//!
//! Run with `RUST_LOG=debug cargo run --example kmeans` to watch the iterations.

use lloyd::{Kmeans, Result};

fn main() -> Result<()> {
    env_logger::init();

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

    km.start()?;
    println!("=== After start ===");
    print_clusters(&km);

    let stats = km.run(None)?;
    println!(
        "\n=== After run ({} steps, {} moves) ===",
        stats.steps, stats.moves
    );
    print_clusters(&km);

    println!("\n(30, 10) belongs with centroid {}", km.find_cluster([30, 10])?);
    Ok(())
}

fn print_clusters(km: &Kmeans) {
    for (i, cluster) in km.clusters().iter().enumerate() {
        let members: Vec<String> = cluster.members.iter().map(ToString::to_string).collect();
        println!(
            "  cluster {} centroid {} => {}",
            i,
            cluster.centroid,
            members.join(" ")
        );
    }
}

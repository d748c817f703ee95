use songgraph_core::{EdgeConfig, FeatureConfiguration, SongGraphBuilder, SongMetadata};
use std::time::Instant;

fn main() {
    let song_counts = [500, 1_000, 2_000, 4_000];

    println!("🚀 Timing the pairwise edge pass on synthetic catalogs...\n");

    for song_count in song_counts {
        let builder = synthetic_catalog(song_count);

        let timer = Instant::now();
        let (graph, stats) = match builder.build_edges(&EdgeConfig::default()) {
            Ok(result) => result,
            Err(error) => {
                eprintln!("❌ Error: {}", error);
                std::process::exit(1);
            }
        };
        let elapsed = timer.elapsed().as_secs_f64();

        let busiest = graph
            .keys()
            .map(|key| graph.neighbor_count(key))
            .max()
            .unwrap_or(0);

        println!(
            "{:>6} songs | {:>10} pairs | {:>7} edges | max degree {:>4} | {:.3} sec",
            song_count, stats.pairs_compared, stats.edges_added, busiest, elapsed
        );
    }
}

fn synthetic_catalog(song_count: usize) -> SongGraphBuilder {
    let config = FeatureConfiguration::spotify();
    let mut builder = SongGraphBuilder::new(config.clone());

    // Low-discrepancy sequence so runs are reproducible without a RNG
    for i in 0..song_count {
        let step = i as f64 + 1.0;
        let features = config
            .specs()
            .iter()
            .enumerate()
            .map(|(dim, spec)| {
                let unit = (step * (0.618_034 + dim as f64 * 0.137)).fract();
                (spec.name.clone(), spec.min_value + unit * (spec.max_value - spec.min_value))
            })
            .collect();

        let name = format!("Synthetic {}", i);
        builder.add_song(
            name.clone(),
            features,
            SongMetadata::new(&name, "Bench", "Bench", (i % 100) as f64),
        );
    }

    builder
}

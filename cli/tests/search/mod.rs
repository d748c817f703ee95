use songgraph::{Args, create_search_request, execute_search};
use songgraph_core::{FeatureConfiguration, SongGraph, SongGraphBuilder, SongMetadata};
use std::path::PathBuf;

pub fn test_args(seeds: &[&str], limit: usize) -> Args {
    Args {
        seeds: seeds.iter().map(|seed| seed.to_string()).collect(),
        catalog: PathBuf::from("catalog.csv"),
        limit,
        threshold: 0.3,
        top_k: 20,
        json: false,
        no_color: true,
        verbose: false,
        quiet: false,
    }
}

fn test_graph() -> SongGraph {
    let features: songgraph_core::FeatureMap = FeatureConfiguration::spotify()
        .feature_names()
        .map(|name| (name.to_string(), 0.5))
        .collect();

    let mut builder = SongGraphBuilder::default();
    for (key, track, popularity) in [
        ("yellow", "Yellow", 80.0),
        ("fix you", "Fix You", 85.0),
        ("clocks", "Clocks", 75.0),
        ("the scientist", "The Scientist", 82.0),
    ] {
        builder.add_song(key, features.clone(), SongMetadata::new(track, "Coldplay", "Parachutes", popularity));
    }
    builder.add_edge("yellow", "fix you", 0.8).unwrap();
    builder.add_edge("yellow", "clocks", 0.6).unwrap();
    builder.add_edge("clocks", "the scientist", 0.9).unwrap();
    builder.freeze()
}

#[test]
fn test_search_request_resolves_names() {
    let graph = test_graph();

    let request = create_search_request(test_args(&["YELLOW", "clocks "], 5), &graph).unwrap();

    assert_eq!(request.seed_keys, vec!["yellow", "clocks"]);
    assert_eq!(request.seed_names, vec!["Yellow", "Clocks"]);
    assert!(request.unmatched.is_empty());
}

#[test]
fn test_search_request_reports_unmatched_names() {
    let graph = test_graph();

    let request = create_search_request(test_args(&["Yellow", "Viva la Vida"], 5), &graph).unwrap();

    assert_eq!(request.seed_keys, vec!["yellow"]);
    assert_eq!(request.unmatched, vec!["Viva la Vida"]);
}

#[test]
fn test_search_request_ignores_repeated_seeds() {
    let graph = test_graph();

    let request = create_search_request(test_args(&["Yellow", "yellow"], 5), &graph).unwrap();
    assert_eq!(request.seed_keys, vec!["yellow"]);
}

#[test]
fn test_search_request_fails_without_matches() {
    let graph = test_graph();

    let result = create_search_request(test_args(&["Nonexistent Song"], 5), &graph);
    assert!(result.is_err());
    assert!(result.err().unwrap().contains("\"Nonexistent Song\""));
}

#[test]
fn test_execute_search_ranks_and_limits() {
    let graph = test_graph();
    let request = create_search_request(test_args(&["Yellow", "Clocks"], 1), &graph).unwrap();

    let result = execute_search(request, &graph);

    // The scientist (0.9 from clocks) outranks fix you (0.8 from yellow)
    assert_eq!(result.recommendations.len(), 1);
    assert_eq!(result.recommendations[0].track_name, "The Scientist");
    assert_eq!(result.seed_names, vec!["Yellow", "Clocks"]);
}

#[test]
fn test_edge_defaults_match_library_defaults() {
    use clap::Parser;

    let args = Args::try_parse_from(["songgraph", "Yellow"]).unwrap();
    let defaults = songgraph_core::EdgeConfig::default();

    assert_eq!(args.threshold, defaults.threshold);
    assert_eq!(args.top_k, defaults.top_k);
}

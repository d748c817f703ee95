use super::{add_point, catalog_builder, metadata, plane_builder, spotify_features};
use songgraph_core::{EdgeConfig, GraphError, SongGraph, SongGraphBuilder};

#[test]
fn test_add_song_is_idempotent() {
    let mut builder = SongGraphBuilder::default();
    let first = spotify_features([0.5, 0.6, 0.7, 110.0, -7.0, 0.2, 0.0]);
    let second = spotify_features([0.1, 0.1, 0.1, 70.0, -20.0, 0.9, 0.9]);

    assert!(builder.add_song("track", first.clone(), metadata("Track", 10.0)));
    assert!(!builder.add_song("track", second, metadata("Other Track", 99.0)));
    assert_eq!(builder.len(), 1);

    let graph = builder.freeze();
    let song = graph.song("track").unwrap();
    assert_eq!(song.features, first);
    assert_eq!(song.metadata.track_name.as_deref(), Some("Track"));
    assert_eq!(song.metadata.popularity, Some(10.0));
}

#[test]
fn test_edges_are_symmetric_without_self_loops() {
    let (graph, _) = catalog_builder(60)
        .build_edges(&EdgeConfig::new(0.3, 5))
        .unwrap();

    assert!(graph.edge_count() > 0);
    for key in graph.keys() {
        for (neighbor, weight) in graph.neighbors(key) {
            assert_ne!(neighbor, key, "{} is its own neighbor", key);
            assert_eq!(graph.neighbor_weight(neighbor, key), Some(weight));
        }
    }
}

#[test]
fn test_edge_weights_match_similarity_scores() {
    let (graph, _) = catalog_builder(30)
        .build_edges(&EdgeConfig::default())
        .unwrap();

    for key in graph.keys() {
        for (neighbor, weight) in graph.neighbors(key) {
            assert_eq!(graph.similarity_score(key, neighbor).unwrap(), weight);
            assert!(weight > 0.3);
        }
    }
}

#[test]
fn test_first_song_never_exceeds_top_k() {
    let top_k = 3;
    let (graph, _) = catalog_builder(50)
        .build_edges(&EdgeConfig::new(0.0, top_k))
        .unwrap();

    // Every edge of the first song comes from its own pass
    assert_eq!(graph.neighbor_count("song 0"), top_k);
}

#[test]
fn test_later_song_can_exceed_top_k() {
    let mut builder = plane_builder();
    add_point(&mut builder, "a", 1.0, 0.0);
    add_point(&mut builder, "b", 0.0, 1.0);
    add_point(&mut builder, "hub", 1.0, 1.0);

    let (graph, _) = builder.build_edges(&EdgeConfig::new(0.4, 1)).unwrap();

    assert_eq!(graph.neighbor_count("a"), 1);
    assert_eq!(graph.neighbor_count("b"), 1);
    assert_eq!(graph.neighbor_count("hub"), 2);
}

#[test]
fn test_top_k_ties_prefer_earlier_songs() {
    let mut builder = plane_builder();
    add_point(&mut builder, "hub", 1.0, 1.0);
    add_point(&mut builder, "a", 1.0, 0.0);
    add_point(&mut builder, "b", 0.0, 1.0);

    let (graph, _) = builder.build_edges(&EdgeConfig::new(0.4, 1)).unwrap();

    assert_eq!(graph.neighbors("hub"), vec![("a", graph.neighbor_weight("hub", "a").unwrap())]);
    assert_eq!(graph.neighbor_count("b"), 0);
}

#[test]
fn test_threshold_is_exclusive() {
    let mut builder = plane_builder();
    add_point(&mut builder, "a", 1.0, 0.0);
    add_point(&mut builder, "b", 1.0, 1.0);
    let score = builder.similarity_score("a", "b").unwrap();

    let (graph, _) = builder.build_edges(&EdgeConfig::new(score, 20)).unwrap();
    assert_eq!(graph.edge_count(), 0);

    let mut builder = plane_builder();
    add_point(&mut builder, "a", 1.0, 0.0);
    add_point(&mut builder, "b", 1.0, 1.0);

    let (graph, _) = builder.build_edges(&EdgeConfig::new(score - 1e-9, 20)).unwrap();
    assert_eq!(graph.neighbor_weight("a", "b"), Some(score));
}

#[test]
fn test_build_stats() {
    let (graph, stats) = catalog_builder(25)
        .build_edges(&EdgeConfig::new(0.3, 4))
        .unwrap();

    assert_eq!(stats.songs, 25);
    assert_eq!(stats.pairs_compared, 25 * 24 / 2);
    assert_eq!(stats.edges_added, graph.edge_count());
    assert!(stats.edges_added <= 25 * 4);
}

#[test]
fn test_missing_feature_aborts_build() {
    let mut builder = catalog_builder(5);
    let mut features = spotify_features([0.5, 0.5, 0.5, 120.0, -8.0, 0.1, 0.0]);
    features.remove("valence");
    builder.add_song("broken", features, metadata("Broken", 1.0));

    let result = builder.build_edges(&EdgeConfig::default());
    assert!(matches!(
        result,
        Err(GraphError::MissingFeature { key, feature }) if key == "broken" && feature == "valence"
    ));
}

#[test]
fn test_empty_builder_builds_empty_graph() {
    let (graph, stats) = SongGraphBuilder::default()
        .build_edges(&EdgeConfig::default())
        .unwrap();

    assert!(graph.is_empty());
    assert_eq!(stats.pairs_compared, 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_connects_both_directions() {
    let mut builder = plane_builder();
    add_point(&mut builder, "a", 1.0, 0.0);
    add_point(&mut builder, "b", 0.0, 1.0);

    builder.add_edge("a", "b", 0.42).unwrap();
    builder.add_edge("a", "a", 0.99).unwrap();
    let graph = builder.freeze();

    assert_eq!(graph.neighbor_weight("a", "b"), Some(0.42));
    assert_eq!(graph.neighbor_weight("b", "a"), Some(0.42));
    assert_eq!(graph.neighbor_weight("a", "a"), None);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_rejects_unknown_songs() {
    let mut builder = plane_builder();
    add_point(&mut builder, "a", 1.0, 0.0);

    assert_eq!(
        builder.add_edge("a", "ghost", 0.5),
        Err(GraphError::UnknownItem("ghost".to_string()))
    );
}

#[test]
fn test_graph_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SongGraph>();
}

#[test]
fn test_non_finite_feature_aborts_build() {
    let mut builder = catalog_builder(5);
    builder.add_song(
        "broken",
        spotify_features([f64::NAN, 0.5, 0.5, 120.0, -8.0, 0.1, 0.0]),
        metadata("Broken", 1.0),
    );

    let result = builder.build_edges(&EdgeConfig::default());
    assert!(matches!(
        result,
        Err(GraphError::NonFiniteFeature { key, .. }) if key == "broken"
    ));
}

use super::spotify_features;
use proptest::prelude::*;
use songgraph_core::{FeatureConfiguration, Song, SongMetadata, similarity};

fn arbitrary_song(key: &'static str) -> impl Strategy<Value = Song> {
    (
        -0.5..1.5f64,
        -0.5..1.5f64,
        -0.5..1.5f64,
        0.0..260.0f64,
        -60.0..5.0f64,
        -0.5..1.5f64,
        -0.5..1.5f64,
    )
        .prop_map(move |(d, e, v, t, l, a, i)| {
            Song::new(key, spotify_features(d, e, v, t, l, a, i), SongMetadata::default())
        })
}

proptest! {
    #[test]
    fn similarity_stays_within_unit_interval(a in arbitrary_song("a"), b in arbitrary_song("b")) {
        let score = similarity(&FeatureConfiguration::spotify(), &a, &b).unwrap();
        prop_assert!(score >= 0.0);
        // Identical vectors may land one ulp above 1.0
        prop_assert!(score <= 1.0 + 1e-12);
    }

    #[test]
    fn similarity_is_order_independent(a in arbitrary_song("a"), b in arbitrary_song("b")) {
        let config = FeatureConfiguration::spotify();
        prop_assert_eq!(
            similarity(&config, &a, &b).unwrap(),
            similarity(&config, &b, &a).unwrap()
        );
    }
}

pub mod error;
pub mod feature_config;
pub mod graph;
pub mod recommend;
pub mod similarity;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{GraphError, Result};
pub use feature_config::{EdgeConfig, FeatureConfiguration, FeatureSpec};
pub use graph::{BuildStats, SongGraph, SongGraphBuilder};
pub use recommend::{Recommendation, ScoredCandidate};
pub use similarity::{FeatureMap, Song, SongMetadata, WeightedVector, similarity};

use crate::error::{GraphError, Result};
use crate::feature_config::FeatureConfiguration;
use rustc_hash::FxHashMap;
use serde::Serialize;

pub type FeatureMap = FxHashMap<String, f64>;

/// Display and ranking fields. Never used for similarity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SongMetadata {
    pub track_name: Option<String>,
    pub artists: Option<String>,
    pub album_name: Option<String>,
    pub popularity: Option<f64>,
}

impl SongMetadata {
    pub fn new(track_name: &str, artists: &str, album_name: &str, popularity: f64) -> Self {
        Self {
            track_name: Some(track_name.to_string()),
            artists: Some(artists.to_string()),
            album_name: Some(album_name.to_string()),
            popularity: Some(popularity),
        }
    }
}

/// A catalog row as handed over by a loader: key, raw features, metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub key: String,
    pub features: FeatureMap,
    pub metadata: SongMetadata,
}

impl Song {
    pub fn new(key: impl Into<String>, features: FeatureMap, metadata: SongMetadata) -> Self {
        Self {
            key: key.into(),
            features,
            metadata,
        }
    }
}

/// Weighted, normalized feature components of one song.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedVector {
    components: Vec<f64>,
    squared_magnitude: f64,
}

impl WeightedVector {
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    pub fn is_zero(&self) -> bool {
        self.squared_magnitude == 0.0
    }

    /// Squared weighted cosine similarity. Zero vectors score exactly 0.0.
    ///
    /// Not clamped: rounding in the square roots can put identical vectors
    /// one ulp above 1.0.
    pub fn similarity(&self, other: &WeightedVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }

        let dot_product: f64 = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum();

        let raw_score = dot_product / (self.squared_magnitude.sqrt() * other.squared_magnitude.sqrt());
        raw_score * raw_score
    }
}

impl FeatureConfiguration {
    pub fn weighted_vector(&self, song: &Song) -> Result<WeightedVector> {
        let mut components = Vec::with_capacity(self.len());
        let mut squared_magnitude = 0.0;

        for spec in self.specs() {
            let raw_value = song
                .features
                .get(&spec.name)
                .copied()
                .ok_or_else(|| GraphError::MissingFeature {
                    key: song.key.clone(),
                    feature: spec.name.clone(),
                })?;

            if !raw_value.is_finite() {
                return Err(GraphError::NonFiniteFeature {
                    key: song.key.clone(),
                    feature: spec.name.clone(),
                    value: raw_value,
                });
            }

            let component = spec.weighted_component(raw_value);
            squared_magnitude += component * component;
            components.push(component);
        }

        Ok(WeightedVector {
            components,
            squared_magnitude,
        })
    }
}

pub fn similarity(config: &FeatureConfiguration, first: &Song, second: &Song) -> Result<f64> {
    let first_vector = config.weighted_vector(first)?;
    let second_vector = config.weighted_vector(second)?;
    Ok(first_vector.similarity(&second_vector))
}

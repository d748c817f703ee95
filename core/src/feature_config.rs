use crate::error::{GraphError, Result};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// One audio feature and how it contributes to similarity.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpec {
    pub name: String,
    pub weight: f64,
    /// Raw values are clipped into `[min_value, max_value]` before normalization
    pub min_value: f64,
    pub max_value: f64,
}

impl FeatureSpec {
    pub fn new(name: impl Into<String>, weight: f64, min_value: f64, max_value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            min_value,
            max_value,
        }
    }

    /// Clip, min-max normalize into `[0, 1]`, then scale by the weight.
    pub fn weighted_component(&self, raw_value: f64) -> f64 {
        let clipped = raw_value.min(self.max_value).max(self.min_value);
        ((clipped - self.min_value) / (self.max_value - self.min_value)) * self.weight
    }
}

/// Ordered feature table shared by every similarity computation of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfiguration {
    specs: Vec<FeatureSpec>,
}

impl FeatureConfiguration {
    pub fn new(specs: Vec<FeatureSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(GraphError::InvalidConfiguration(
                "at least one feature is required".to_string(),
            ));
        }

        for spec in &specs {
            validate_spec(spec)?;
        }

        let weight_sum: f64 = specs.iter().map(|spec| spec.weight).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!(weight_sum, "feature weights do not sum to 1.0");
        }

        Ok(Self { specs })
    }

    /// Audio-feature table used for the Spotify catalog.
    pub fn spotify() -> Self {
        Self {
            specs: vec![
                FeatureSpec::new("danceability", 0.25, 0.0, 1.0),
                FeatureSpec::new("energy", 0.25, 0.0, 1.0),
                FeatureSpec::new("valence", 0.15, 0.0, 1.0),
                FeatureSpec::new("tempo", 0.1, 50.0, 200.0),
                FeatureSpec::new("loudness", 0.1, -30.0, 0.0),
                FeatureSpec::new("acousticness", 0.1, 0.0, 1.0),
                FeatureSpec::new("instrumentalness", 0.05, 0.0, 1.0),
            ],
        }
    }

    pub fn specs(&self) -> &[FeatureSpec] {
        &self.specs
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for FeatureConfiguration {
    fn default() -> Self {
        Self::spotify()
    }
}

fn validate_spec(spec: &FeatureSpec) -> Result<()> {
    if !spec.weight.is_finite() || spec.weight < 0.0 {
        return Err(GraphError::InvalidConfiguration(format!(
            "feature '{}' has invalid weight {}",
            spec.name, spec.weight
        )));
    }

    if !spec.min_value.is_finite() || !spec.max_value.is_finite() || spec.max_value <= spec.min_value {
        return Err(GraphError::InvalidConfiguration(format!(
            "feature '{}' has empty range [{}, {}]",
            spec.name, spec.min_value, spec.max_value
        )));
    }

    Ok(())
}

/// Tunables for the pairwise edge construction pass
#[derive(Debug, Clone)]
pub struct EdgeConfig {
    /// Only keep pairs scoring strictly above this similarity (0.0-1.0)
    pub threshold: f64,
    /// Keep at most this many candidates from each song's own pass
    pub top_k: usize,
}

impl EdgeConfig {
    pub fn new(threshold: f64, top_k: usize) -> Self {
        Self { threshold, top_k }
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            top_k: 20,
        }
    }
}

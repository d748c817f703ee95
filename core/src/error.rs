#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Song '{key}' has no value for configured feature '{feature}'")]
    MissingFeature { key: String, feature: String },

    #[error("Song '{key}' has non-finite value {value} for feature '{feature}'")]
    NonFiniteFeature {
        key: String,
        feature: String,
        value: f64,
    },

    #[error("Song '{key}' has no '{field}' metadata")]
    MissingMetadata { key: String, field: &'static str },

    #[error("Song '{0}' not found in graph")]
    UnknownItem(String),

    #[error("Invalid feature configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

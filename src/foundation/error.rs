use crate::data::series::Attribute;

/// Crate-wide result alias.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors produced while loading data, configuring scales or rendering frames.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// An entity's time series cannot be sampled.
    #[error("malformed series: {entity}.{attribute}: {reason}")]
    MalformedSeries {
        /// Entity name.
        entity: String,
        /// Attribute whose series is broken.
        attribute: Attribute,
        /// Human readable cause.
        reason: String,
    },

    /// Invalid configuration, route or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// SVG serialization or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with context attached by `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    pub fn malformed(
        entity: impl Into<String>,
        attribute: Attribute,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedSeries {
            entity: entity.into(),
            attribute,
            reason: reason.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

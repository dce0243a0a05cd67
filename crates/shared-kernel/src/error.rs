// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// The analyzer itself is total; every variant here originates at the
/// boundary (reading input, rendering output, validating flags).
#[derive(Debug, Error)]
pub enum TextStatsError {
    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, TextStatsError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {origin}: {source}")]
    StreamRead {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding {
        origin: String,
        valid_up_to: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    /// `Config` assembly from parsed arguments was rejected by its builder.
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),

    #[error("Failed to render report: {0}")]
    RenderFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for TextStatsError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::StreamRead { origin: "input".to_string(), source: err }.into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TextStatsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for TextStatsError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<std::fmt::Error> for PresentationError {
    fn from(err: std::fmt::Error) -> Self {
        Self::RenderFailed(err.to_string())
    }
}

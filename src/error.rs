//! Error types for the jurisdiction lookup.

use thiserror::Error;

/// Failure of a single feature-service query. Never surfaces past the resolver.
#[derive(Debug, Error)]
pub enum GisError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    #[error("service error {code}: {message}")]
    Service { code: i64, message: String },
}

/// Errors returned to callers of [`crate::JurisdictionService`]
#[derive(Debug, Error)]
pub enum JurisdictionError {
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("failed to determine jurisdiction: {0}")]
    Failed(String),
}

pub type Result<T> = std::result::Result<T, JurisdictionError>;

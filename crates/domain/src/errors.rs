//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for construction and configuration paths.
///
/// Request outcomes never use this type: they travel in the
/// [`ApiResult`](crate::ApiResult) envelope instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DopplerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Result type alias for Doppler operations
pub type Result<T> = std::result::Result<T, DopplerError>;

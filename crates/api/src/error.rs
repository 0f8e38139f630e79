//! Error types for request building.

/// Errors that can occur while building or serializing requests.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

use thiserror::Error;

/// Result type for fingerprint operations.
pub type Result<T> = std::result::Result<T, FingerprintError>;

/// Errors raised while building or parsing a browser identity.
#[derive(Debug, Error)]
pub enum FingerprintError {
    /// The platform name is not one of windows, macos, linux, android or ios.
    #[error("invalid platform: {0:?}")]
    InvalidPlatform(String),
    /// A reference table has no entry to draw from, including its fallback.
    #[error("reference pool is empty: {0}")]
    EmptyPool(&'static str),
    /// The value does not have the shape of a browser fingerprint.
    #[error("invalid fingerprint shape: {0}")]
    InvalidShape(String),
    /// Deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body violates the published schema
    #[error("Schema validation error: {0}")]
    Schema(String),

    /// Login rejected or token missing
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A persisted order does not match what the purchase reported
    #[error("Order verification failed: {0}")]
    Verification(String),
}

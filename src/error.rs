use thiserror::Error;

/// Main error type for HLTB lookups
#[derive(Error, Debug)]
pub enum LookupError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Redirect could not be followed
    #[error("Redirect from {url} failed: {message}")]
    Redirect { url: String, message: String },

    /// Malformed endpoint or redirect target
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Cache lookup errors
    #[error("Cache error: {0}")]
    Cache(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LookupError>;

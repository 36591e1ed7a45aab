use thiserror::Error;

/// Every way a discovery attempt can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid genre: {0}")]
    InvalidGenre(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Azure OpenAI request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Azure OpenAI API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Azure OpenAI returned no message content")]
    EmptyCompletion,

    #[error("Failed to parse JSON response, error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("No recommendations found in response.")]
    NoRecommendations,

    #[error("Malformed recommendation #{index}: {reason}")]
    FieldError { index: usize, reason: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

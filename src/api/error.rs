use thiserror::Error;

/// Failures below the level of a logical `success: false` reply.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-2xx status without a readable envelope.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The in-memory backend could not reach its store.
    #[error("Backend unavailable: {0}")]
    Backend(String),
}

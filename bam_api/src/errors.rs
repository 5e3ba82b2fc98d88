//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API rejected the subscription key (HTTP 401).
    #[error("Access denied (HTTP 401): verify the subscription key configured for this service")]
    InvalidApiKey,
    /// The API throttled the request (HTTP 429). Carries the server's message.
    #[error("Rate limit exceeded (HTTP 429): {message}")]
    RateLimited { message: String },
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// Network-level failure, including the request timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The response body could not be decoded as a JSON array of records.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// The endpoint URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

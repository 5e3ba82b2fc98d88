//! Error types for the library layer.

use std::fmt;

use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation and key file failures.
#[derive(Debug)]
pub enum BamError {
    /// An error from the underlying API client.
    Api(bam_api::Error),
    /// User-provided input failed validation. No request was sent.
    Validation(ValidationError),
    /// The key file could not be read or written.
    Config(ConfigError),
}

/// Coarse classification callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed date, currency code or instrument.
    Validation,
    /// The subscription key was rejected.
    Credential,
    /// The server throttled the request.
    RateLimit,
    /// Any other HTTP or network failure.
    Transport,
    /// Key file failure.
    Config,
}

impl BamError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Config(_) => ErrorKind::Config,
            Self::Api(bam_api::Error::InvalidApiKey) => ErrorKind::Credential,
            Self::Api(bam_api::Error::RateLimited { .. }) => ErrorKind::RateLimit,
            Self::Api(_) => ErrorKind::Transport,
        }
    }
}

impl fmt::Display for BamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Validation(e) => write!(f, "Invalid input: {}", e),
            Self::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for BamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<bam_api::Error> for BamError {
    fn from(e: bam_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<ValidationError> for BamError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConfigError> for BamError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

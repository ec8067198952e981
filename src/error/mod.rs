//! Error types for dust-cli.

use std::path::PathBuf;

use strum::Display;
use thiserror::Error;

/// Primary error type for all Dust operations.
#[derive(Error, Debug)]
pub enum DustError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing configuration: {key} is not set")]
    MissingConfiguration { key: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error decoding JSON response from server: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    MalformedResponse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not a text file: {}", .path.display())]
    NotText { path: PathBuf },

    #[error("No active agent. Start with @agent_id <prompt>")]
    NoActiveAgent,
}

/// Broad error category used when reporting failures to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Authentication,
    Network,
    Timeout,
    Server,
    Api,
    Configuration,
    MalformedResponse,
    Filesystem,
    Usage,
}

impl DustError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn missing(key: impl Into<String>) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) | Self::MissingConfiguration { .. } => {
                ErrorCategory::Configuration
            }
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
            Self::Network(e) if e.is_timeout() => ErrorCategory::Timeout,
            Self::Network(_) => ErrorCategory::Network,
            Self::Serialization(_) | Self::MalformedResponse(_) => {
                ErrorCategory::MalformedResponse
            }
            Self::Io(_) | Self::NotText { .. } => ErrorCategory::Filesystem,
            Self::InvalidArgument(_) | Self::NoActiveAgent => ErrorCategory::Usage,
        }
    }

    /// Raw response body of a failed HTTP exchange, when the server sent one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DustError>;

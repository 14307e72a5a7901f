// src/error.rs

//! Unified error handling for the roster scraper.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A pool unit could not complete normally
    #[error("Unit error for {context}: {message}")]
    Unit { context: String, message: String },
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a non-success status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a unit error with context.
    pub fn unit(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Unit {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Whether this error came from the network layer.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_error_formats_context() {
        let err = AppError::unit("https://example.com/p/1", "task panicked");
        assert_eq!(
            err.to_string(),
            "Unit error for https://example.com/p/1: task panicked"
        );
        assert!(!err.is_network());
    }

    #[test]
    fn status_error_is_network() {
        let err = AppError::status("https://example.com/team", 503);
        assert!(err.is_network());
        assert_eq!(err.to_string(), "HTTP status 503 for https://example.com/team");
    }

    #[test]
    fn selector_error_keeps_source_text() {
        let err = AppError::selector("[[bad", "unexpected token");
        assert!(err.to_string().contains("[[bad"));
    }
}

//! Error types for flock
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for flock
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("{var} environment variable not set")]
    MissingCredential { var: &'static str },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("cannot make request to {endpoint}: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request ({url}) failed ({status} {status_text})\nbody={body}")]
    HttpStatus {
        url: String,
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing credential error
    pub fn missing_credential(var: &'static str) -> Self {
        Self::MissingCredential { var }
    }

    /// Create a transport error for the given endpoint
    pub fn request(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an HTTP status error
    pub fn http_status(
        url: impl Into<String>,
        status: u16,
        status_text: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }
}

/// Result type alias for flock
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_credential("TWITTER_CONSUMER_KEY");
        assert_eq!(
            err.to_string(),
            "TWITTER_CONSUMER_KEY environment variable not set"
        );

        let err = Error::http_status(
            "https://api.twitter.com/1.1/blocks/ids.json",
            429,
            "Too Many Requests",
            r#"{"errors":[{"code":88}]}"#,
        );
        assert_eq!(
            err.to_string(),
            "request (https://api.twitter.com/1.1/blocks/ids.json) failed (429 Too Many Requests)\nbody={\"errors\":[{\"code\":88}]}"
        );
    }

    #[test]
    fn test_decode_error_carries_url() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::decode("https://x/y", source);
        assert!(err
            .to_string()
            .starts_with("failed to decode response from https://x/y"));
    }
}

//! Error types for the TVmaze Show Browser
//!
//! This module defines all error types used throughout the library.
//! TvMazeError implements Serialize for Tauri compatibility.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for TVmaze catalog operations
#[derive(Error, Debug)]
pub enum TvMazeError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Catalog answered with a non-success status
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body was not the expected JSON shape
    #[error("Failed to parse catalog response: {0}")]
    ParseError(String),

    /// Show identifier is not a positive integer
    #[error("Invalid show ID: {0:?}")]
    InvalidId(String),
}

impl From<serde_json::Error> for TvMazeError {
    fn from(err: serde_json::Error) -> Self {
        TvMazeError::ParseError(err.to_string())
    }
}

/// Serialize TvMazeError as a string for Tauri compatibility
impl Serialize for TvMazeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for TVmaze catalog operations
pub type Result<T> = std::result::Result<T, TvMazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status() {
        let error = TvMazeError::Status {
            status: 503,
            url: "https://api.tvmaze.com/search/shows?q=x".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected HTTP status 503 for https://api.tvmaze.com/search/shows?q=x"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = TvMazeError::NotFound("/shows/1/episodes".to_string());
        assert_eq!(error.to_string(), "Not found: /shows/1/episodes");
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = TvMazeError::ParseError("missing field `id`".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to parse catalog response: missing field `id`"
        );
    }

    #[test]
    fn test_error_display_invalid_id() {
        let error = TvMazeError::InvalidId("abc".to_string());
        assert_eq!(error.to_string(), "Invalid show ID: \"abc\"");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let error = TvMazeError::from(json_err);
        assert!(matches!(error, TvMazeError::ParseError(_)));
        assert!(error.to_string().starts_with("Failed to parse catalog response"));
    }

    #[test]
    fn test_error_serialize() {
        let error = TvMazeError::ParseError("test error".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Failed to parse catalog response: test error\"");
    }

    #[test]
    fn test_error_serialize_invalid_id() {
        let error = TvMazeError::InvalidId("42x".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Invalid show ID: \\\"42x\\\"\"");
    }
}

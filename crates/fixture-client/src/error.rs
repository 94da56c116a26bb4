//! Error types for fixture client operations

use thiserror::Error;

/// Result type alias for fixture client operations
pub type Result<T> = std::result::Result<T, FixtureClientError>;

/// Errors that can occur during fixture client operations
#[derive(Error, Debug)]
pub enum FixtureClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server answered with a non-success status
    #[error("Server error {status}: {detail}")]
    ServerError { status: u16, detail: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl FixtureClientError {
    pub fn server_error(status: u16, detail: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            detail: detail.into(),
        }
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `detail` text of a server error
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ServerError { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// True for a 400 response, i.e. a check refused the request
    pub fn is_rejection(&self) -> bool {
        self.status() == Some(400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_accessors() {
        let err = FixtureClientError::server_error(400, "invalid token");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), Some("invalid token"));
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "Server error 400: invalid token");
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = FixtureClientError::ParseError("bad".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_rejection());
    }
}

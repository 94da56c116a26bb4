//! Error types for fixture checks and configuration

use thiserror::Error;

/// Reason a check refused its input.
///
/// The `Display` text is the exact `detail` string the API puts in the
/// response body, so clients can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Login username did not match
    #[error("invalid username")]
    InvalidUsername,

    /// Login password did not match
    #[error("invalid password")]
    InvalidPassword,

    /// Login token did not match
    #[error("invalid token")]
    InvalidToken,

    /// Upload token did not match
    #[error("Invalid token")]
    InvalidUploadToken,

    /// Uploaded content differs from the reference file
    #[error("Invalid file")]
    InvalidFile,

    /// Uploaded content is not valid UTF-8 text
    #[error("Invalid file encoding")]
    UndecodableFile,
}

/// Errors raised while loading a fixture config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

//! fixture-core - Checks behind the CSRF test fixture
//!
//! Holds the pieces of the fixture that have nothing to do with HTTP:
//! the expected credential triple, the session cookie, the reference file
//! location, and the pure comparison functions the API layer calls.
//!
//! # Usage
//!
//! ```
//! use fixture_core::{check_credentials, FixtureConfig, Rejection};
//!
//! let config = FixtureConfig::default();
//! let creds = &config.credentials;
//!
//! assert_eq!(check_credentials(creds, "admin", "123123", "fjlalksdjfaksdj"), Ok("ok"));
//! assert_eq!(
//!     check_credentials(creds, "root", "wrong", "wrong"),
//!     Err(Rejection::InvalidUsername)
//! );
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod upload;

pub use config::{
    CookieConfig, ExpectedCredentials, FixtureConfig, ServerConfig, UploadConfig,
};
pub use credentials::{check_credentials, Credentials};
pub use error::{ConfigError, Rejection};
pub use upload::{check_upload_content, check_upload_token};

/// Marker returned by every check that passes
pub const OK: &str = "ok";

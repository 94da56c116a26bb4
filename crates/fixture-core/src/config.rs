//! TOML configuration for the fixture
//!
//! Every value the fixture compares against or hands out lives here. The
//! defaults are the constants test clients are written against, so running
//! without a config file gives the canonical fixture. A file only needs to
//! name the values it changes.
//!
//! ```toml
//! [server]
//! port = 9999
//!
//! [credentials]
//! token = "another-token"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Listen address settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The credential triple every login is compared against
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExpectedCredentials {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Default for ExpectedCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "123123".to_string(),
            token: "fjlalksdjfaksdj".to_string(),
        }
    }
}

/// Cookie set by the CSRF page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    pub name: String,
    pub value: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "PHPSESSID".to_string(),
            value: "SUPERSECURECOOKIE123".to_string(),
        }
    }
}

/// Upload comparison settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// File uploads are compared against. Relative paths resolve against the
    /// process working directory at request time.
    pub reference_path: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            reference_path: PathBuf::from("../Cargo.toml"),
        }
    }
}

/// Top-level fixture configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub server: ServerConfig,
    pub credentials: ExpectedCredentials,
    pub cookie: CookieConfig,
    pub upload: UploadConfig,
}

impl FixtureConfig {
    /// Load configuration from a TOML file, filling gaps with defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded fixture config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Override the reference file path
    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.upload.reference_path = path.into();
        self
    }
}

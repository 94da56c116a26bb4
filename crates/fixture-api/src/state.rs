//! Application state for the fixture API

use std::path::Path;
use std::sync::Arc;

use fixture_core::{CookieConfig, ExpectedCredentials, FixtureConfig};

/// Application state shared across all handlers.
///
/// Read-only after construction; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<FixtureConfig>,
}

impl AppState {
    /// Create a new AppState from a loaded config
    pub fn new(config: FixtureConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn credentials(&self) -> &ExpectedCredentials {
        &self.config.credentials
    }

    pub fn cookie(&self) -> &CookieConfig {
        &self.config.cookie
    }

    pub fn reference_path(&self) -> &Path {
        &self.config.upload.reference_path
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FixtureConfig::default())
    }
}

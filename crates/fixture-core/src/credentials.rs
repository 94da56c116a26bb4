//! Login credential check

use serde::{Deserialize, Serialize};

use crate::config::ExpectedCredentials;
use crate::error::Rejection;
use crate::OK;

/// Credentials submitted with a login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token: token.into(),
        }
    }

    /// Check these credentials against the expected triple
    pub fn check(&self, expected: &ExpectedCredentials) -> Result<&'static str, Rejection> {
        check_credentials(expected, &self.username, &self.password, &self.token)
    }
}

/// Compare a login attempt against the expected credentials.
///
/// Fields are checked in the order username, password, token. The first
/// mismatch decides the rejection and later fields are not looked at, so a
/// request with every field wrong is always reported as `InvalidUsername`.
pub fn check_credentials(
    expected: &ExpectedCredentials,
    username: &str,
    password: &str,
    token: &str,
) -> Result<&'static str, Rejection> {
    if username != expected.username {
        Err(Rejection::InvalidUsername)
    } else if password != expected.password {
        Err(Rejection::InvalidPassword)
    } else if token != expected.token {
        Err(Rejection::InvalidToken)
    } else {
        Ok(OK)
    }
}

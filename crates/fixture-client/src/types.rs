//! Response types returned by the fixture

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("_token=([^<]+)").expect("token pattern is valid"));

/// The CSRF page and what the client scraped out of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfPage {
    /// Raw HTML body
    pub html: String,
    /// Value following `_token=` in the page, if present
    pub token: Option<String>,
    /// Cookies set by the response as `(name, value)` pairs
    pub cookies: Vec<(String, String)>,
}

impl CsrfPage {
    pub fn new(html: String, cookies: Vec<(String, String)>) -> Self {
        Self {
            token: scrape_token(&html),
            cookies,
            html,
        }
    }

    /// Value of a cookie by name
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Error body sent by the fixture
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub detail: String,
}

/// Extract everything after `_token=` up to the next `<`
pub fn scrape_token(html: &str) -> Option<String> {
    TOKEN_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

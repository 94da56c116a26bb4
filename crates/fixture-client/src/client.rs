//! Fixture HTTP Client implementation

use std::path::Path;
use std::time::Duration;

use fixture_core::Credentials;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{FixtureClientError, Result};
use crate::types::{CsrfPage, ErrorResponse};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the fixture's CSRF, login, and upload endpoints.
///
/// Keeps a cookie store, so the session cookie set by [`get_csrf`]
/// is sent with later requests.
///
/// [`get_csrf`]: FixtureClient::get_csrf
#[derive(Debug, Clone)]
pub struct FixtureClient {
    client: Client,
    base_url: Url,
}

impl FixtureClient {
    /// Create a new fixture client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the fixture (e.g., "http://127.0.0.1:8888")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new fixture client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .cookie_store(true)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // CSRF
    // =========================================================================

    /// Fetch the CSRF page from `/get-csrf`
    #[instrument(skip(self))]
    pub async fn get_csrf(&self) -> Result<CsrfPage> {
        self.get_csrf_at("/get-csrf").await
    }

    /// Fetch the CSRF page from a given path
    #[instrument(skip(self))]
    pub async fn get_csrf_at(&self, path: &str) -> Result<CsrfPage> {
        let url = self.base_url.join(path)?;
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        let cookies = response
            .cookies()
            .map(|c| (c.name().to_string(), c.value().to_string()))
            .collect();
        let html = response.text().await?;

        let page = CsrfPage::new(html, cookies);
        debug!(token = ?page.token, cookies = page.cookies.len(), "Fetched CSRF page");
        Ok(page)
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Log in with a JSON body at `/login`
    #[instrument(skip(self, credentials))]
    pub async fn login_json(&self, credentials: &Credentials) -> Result<String> {
        self.login_json_at("/login", credentials).await
    }

    /// Log in with a JSON body at a given path
    #[instrument(skip(self, credentials))]
    pub async fn login_json_at(&self, path: &str, credentials: &Credentials) -> Result<String> {
        let url = self.base_url.join(path)?;
        let response = self.client.post(url).json(credentials).send().await?;
        self.handle_response(response).await
    }

    /// Log in with an urlencoded form at `/login-form`
    #[instrument(skip(self, credentials))]
    pub async fn login_form(&self, credentials: &Credentials) -> Result<String> {
        self.login_form_at("/login-form", credentials).await
    }

    /// Log in with an urlencoded form at a given path
    #[instrument(skip(self, credentials))]
    pub async fn login_form_at(&self, path: &str, credentials: &Credentials) -> Result<String> {
        let url = self.base_url.join(path)?;
        let response = self.client.post(url).form(credentials).send().await?;
        self.handle_response(response).await
    }

    /// Log in with a multipart form at `/login-form`
    #[instrument(skip(self, credentials))]
    pub async fn login_multipart(&self, credentials: &Credentials) -> Result<String> {
        let url = self.base_url.join("/login-form")?;
        let form = Form::new()
            .text("username", credentials.username.clone())
            .text("password", credentials.password.clone())
            .text("token", credentials.token.clone());

        let response = self.client.post(url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Upload
    // =========================================================================

    /// Upload file content to `/upload/file`
    #[instrument(skip(self, token, content), fields(size = content.len()))]
    pub async fn upload_file(
        &self,
        token: &str,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<String> {
        let url = self.base_url.join("/upload/file")?;
        let part = Part::bytes(content).file_name(filename.to_string());
        let form = Form::new()
            .text("token", token.to_string())
            .part("upload_file", part);

        let response = self.client.post(url).multipart(form).send().await?;
        self.handle_response(response).await
    }

    /// Upload a file from disk to `/upload/file`
    #[instrument(skip(self, token))]
    pub async fn upload_path(&self, token: &str, path: &Path) -> Result<String> {
        let content = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");

        self.upload_file(token, filename, content).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Handle a response carrying a JSON string on success
    async fn handle_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<String>()
                .await
                .map_err(|e| FixtureClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error_from_status(response, status).await)
        }
    }

    /// Extract error from failed response
    async fn extract_error(&self, response: reqwest::Response) -> FixtureClientError {
        let status = response.status();
        self.extract_error_from_status(response, status).await
    }

    async fn extract_error_from_status(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> FixtureClientError {
        let detail = match response.json::<ErrorResponse>().await {
            Ok(err) => err.detail,
            Err(_) => format!("HTTP {}", status),
        };

        FixtureClientError::server_error(status.as_u16(), detail)
    }
}

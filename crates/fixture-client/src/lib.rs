//! Fixture Client Library
//!
//! Typed HTTP client for the CSRF test fixture.
//!
//! # Example
//!
//! ```rust,no_run
//! use fixture_client::FixtureClient;
//! use fixture_core::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FixtureClient::new("http://127.0.0.1:8888")?;
//!
//!     // Scrape the token from the CSRF page
//!     let page = client.get_csrf().await?;
//!     let token = page.token.unwrap_or_default();
//!
//!     // Log in with it
//!     let ok = client
//!         .login_json(&Credentials::new("admin", "123123", token))
//!         .await?;
//!     assert_eq!(ok, "ok");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The [`testing`] module runs a router on a random local port with a
//! client already pointed at it.

pub mod client;
pub mod error;
pub mod testing;
pub mod types;

pub use client::FixtureClient;
pub use error::{FixtureClientError, Result};
pub use types::CsrfPage;

//! fixture-api - HTTP routes for the CSRF test fixture
//!
//! Wires the checks from `fixture-core` to axum routes. Handlers only
//! extract fields and shape responses; every decision is made by the
//! core check functions.
//!
//! # Usage
//!
//! ```ignore
//! use fixture_api::{create_router, AppState};
//! use fixture_core::FixtureConfig;
//!
//! let state = AppState::new(FixtureConfig::default());
//! let router = create_router(state);
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the fixture router with the given application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // CSRF page and session cookie
        .route("/get-csrf", get(handlers::csrf::get_csrf))
        .route("/first/get-csrf", get(handlers::csrf::get_csrf))
        // JSON login
        .route("/login", post(handlers::login::login_json))
        .route("/first/login", post(handlers::login::login_json))
        .route("/login/json", post(handlers::login::login_json))
        // Form login (urlencoded or multipart)
        .route("/login-form", post(handlers::login::login_form))
        .route("/first/login-form", post(handlers::login::login_form))
        .route("/login/form", post(handlers::login::login_form))
        // File upload
        .route("/upload/file", post(handlers::upload::upload_file))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

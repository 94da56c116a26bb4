//! Login handlers
//!
//! JSON and form logins run the same credential check, so identical
//! fields give identical responses whichever transport carried them.

use axum::extract::rejection::JsonRejection;
use axum::extract::{RawQuery, State};
use axum::http::HeaderMap;
use axum::Json;
use fixture_core::Credentials;

use crate::error::ApiError;
use crate::extract::LoginForm;
use crate::state::AppState;

/// POST /login
/// Login with a JSON body `{username, password, token}`
pub async fn login_json(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    tracing::debug!(?headers, query = ?query, "JSON login");
    let Json(credentials) = payload?;
    login(&state, &credentials)
}

/// POST /login-form
/// Login with form fields `username`, `password`, `token`
pub async fn login_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    LoginForm(credentials): LoginForm,
) -> Result<Json<&'static str>, ApiError> {
    tracing::debug!(?headers, query = ?query, "Form login");
    login(&state, &credentials)
}

fn login(state: &AppState, credentials: &Credentials) -> Result<Json<&'static str>, ApiError> {
    let ok = credentials.check(state.credentials())?;
    tracing::info!(username = %credentials.username, "Login accepted");
    Ok(Json(ok))
}

//! CSRF page handler
//!
//! Serves a small HTML page with the token embedded in it and sets the
//! session cookie. Clients scrape the token out of the page with a regex.

use axum::extract::{RawQuery, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::state::AppState;

/// Render the CSRF page for a token
pub fn csrf_page(token: &str) -> String {
    format!("<h1>Alo</h1>\n<p>grep me -> _token={}</p>\n", token)
}

/// GET /get-csrf
/// Return the CSRF page and set the session cookie
pub async fn get_csrf(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    tracing::debug!(?headers, query = ?query, "CSRF page requested");

    let cookie_config = state.cookie();
    let cookie = Cookie::build((cookie_config.name.clone(), cookie_config.value.clone()))
        .path("/")
        .same_site(SameSite::Lax)
        .build();

    tracing::info!(cookie = %cookie_config.name, "Issuing session cookie");

    (jar.add(cookie), Html(csrf_page(&state.credentials().token)))
}

//! Route handlers for the journal web interface.

pub mod auth;
pub mod health;
pub mod journal;
pub mod report;

use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::CookieJar;

use crate::session::{Session, SESSION_COOKIE};
use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Main view: login/signup or the journal, depending on session
        .route("/", get(journal::index))
        // Session flow
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        // Journal actions
        .route("/analyze", post(journal::analyze))
        .route("/report", get(report::download))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/progress", get(journal::progress_api))
        .route("/api/entries", get(journal::entries_api))
}

/// Resolve the current session from the request's cookie jar, if any.
pub async fn current_session(state: &AppState, jar: &CookieJar) -> Option<Session> {
    let token = jar.get(SESSION_COOKIE)?.value().to_string();
    state.sessions.get(&token).await
}

//! Web interface for the Manasaroha mood journal.
//!
//! Serves the sign-up/log-in flow, the journal view with gamified progress,
//! mood analysis via the completion gateway, and PDF report downloads.

mod config;
mod error;
mod routes;
mod session;
mod state;

use std::env;
use std::sync::Arc;

use database::Database;
use mood_gateway::{mock::MockAnalyzer, CompletionClient};
use tower_http::services::ServeDir;
use tracing::{info, warn};
use wellness_core::{GatewayError, MoodAnalyzer};

use crate::config::Config;
use crate::session::SessionStore;
use crate::state::AppState;

/// Pick the analyzer backend.
///
/// The canned analyzer must be requested explicitly with `MOOD_ANALYZER=mock`;
/// it never stands in for a misconfigured gateway, since its output would be
/// persisted and award XP like a real analysis. Without the opt-in, a missing
/// or invalid gateway configuration fails startup.
fn select_analyzer() -> Result<Arc<dyn MoodAnalyzer>, GatewayError> {
    if env::var("MOOD_ANALYZER").as_deref() == Ok("mock") {
        warn!("MOOD_ANALYZER=mock set; serving canned analyses");
        return Ok(Arc::new(MockAnalyzer::new()));
    }

    let client = CompletionClient::from_env()?;
    Ok(Arc::new(client))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting journal web server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    let analyzer = select_analyzer()?;
    info!(analyzer = analyzer.name(), "Analyzer backend selected");

    // Build application state
    let sessions = SessionStore::new(config.session_ttl);
    let state = AppState::new(db, analyzer, sessions);

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Journal web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

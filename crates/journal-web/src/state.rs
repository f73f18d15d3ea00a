//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use wellness_core::MoodAnalyzer;

use crate::session::SessionStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Mood analysis backend.
    pub analyzer: Arc<dyn MoodAnalyzer>,
    /// Live sessions.
    pub sessions: SessionStore,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, analyzer: Arc<dyn MoodAnalyzer>, sessions: SessionStore) -> Self {
        Self {
            db,
            analyzer,
            sessions,
        }
    }
}

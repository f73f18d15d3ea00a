//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use database::{mood_entry, user};

use crate::error::Result;
use crate::state::AppState;

/// Liveness payload with headline store counts.
#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub service: String,
    pub users: i64,
    pub entries: i64,
}

/// Report service health plus user and ledger totals.
pub async fn health(State(state): State<AppState>) -> Result<Json<Health>> {
    let users = user::count_users(state.db.pool()).await?;
    let entries = mood_entry::count_entries(state.db.pool()).await?;

    Ok(Json(Health {
        status: "ok".to_string(),
        service: "manasaroha".to_string(),
        users,
        entries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use database::{Database, NewUser};
    use mood_gateway::mock::MockAnalyzer;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_health_reports_store_counts() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        let state = AppState::new(
            db,
            Arc::new(MockAnalyzer::new()),
            SessionStore::new(Duration::from_secs(60)),
        );

        let Json(body) = health(State(state.clone())).await.unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "manasaroha");
        assert_eq!(body.users, 0);
        assert_eq!(body.entries, 0);

        let new_user = NewUser {
            id: "user-1".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password_hash: String::new(),
            age: 25,
            user_type: "Student".to_string(),
        };
        user::create_user(state.db.pool(), &new_user).await.unwrap();

        let Json(body) = health(State(state)).await.unwrap();
        assert_eq!(body.users, 1);
    }
}

//! Explicit session context for authenticated users.
//!
//! Sessions are created on successful login, removed on logout, and expire on
//! lookup after a TTL. Handlers receive the session as a value; there is no
//! process-global "current user".

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;
use wellness_core::UserType;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "manasaroha_session";

/// An authenticated user's session context.
#[derive(Debug, Clone)]
pub struct Session {
    /// The user's stable id.
    pub user_id: String,
    /// Email used to log in.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Age from the user record.
    pub age: i64,
    /// User category.
    pub user_type: UserType,
    created_at: Instant,
}

/// In-memory session store keyed by opaque token.
#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Create a store whose sessions expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a session for a user and return its token.
    pub async fn create(&self, user: &database::User) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            age: user.age,
            user_type: UserType::parse(&user.user_type),
            created_at: Instant::now(),
        };

        let mut sessions = self.inner.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Look up a session by token, evicting it when expired.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let mut sessions = self.inner.write().await;
        match sessions.get(token) {
            Some(session) if session.created_at.elapsed() < self.ttl => Some(session.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Tear down a session (logout).
    pub async fn remove(&self, token: &str) {
        let mut sessions = self.inner.write().await;
        sessions.remove(token);
    }

    /// Number of live sessions (includes not-yet-evicted expired ones).
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> database::User {
        database::User {
            id: "user-1".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password_hash: String::new(),
            last_activity_date: None,
            streak: 0,
            xp: 0,
            age: 25,
            user_type: "Student".to_string(),
            created_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::new(Duration::from_secs(60));

        let token = store.create(&test_user()).await;
        let session = store.get(&token).await.unwrap();
        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.user_type, UserType::Student);

        store.remove(&token).await;
        assert!(store.get(&token).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(store.get("nope").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_evicted() {
        let store = SessionStore::new(Duration::ZERO);

        let token = store.create(&test_user()).await;
        assert!(store.get(&token).await.is_none());
        // Eviction happened on lookup.
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let store = SessionStore::new(Duration::from_secs(60));

        let first = store.create(&test_user()).await;
        let second = store.create(&test_user()).await;
        assert_ne!(first, second);
        assert_eq!(store.len().await, 2);
    }
}

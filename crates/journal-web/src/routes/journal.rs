//! Journal view and mood analysis handlers.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use database::{mood_entry, user, MoodEntry, NewMoodEntry};
use wellness_core::{progress, scorer, Badge};

use crate::error::{AppError, Result};
use crate::routes::{auth::LoginTemplate, current_session};
use crate::session::Session;
use crate::state::AppState;

/// Entries shown in the recent-history table.
const HISTORY_TAIL: i64 = 5;

/// Journal page template, shown to authenticated users.
#[derive(Template)]
#[template(path = "journal.html")]
pub struct JournalTemplate {
    /// Display name for the greeting.
    pub name: String,
    /// Derived level.
    pub level: i64,
    /// Cumulative XP.
    pub xp: i64,
    /// XP within the current level (0-99).
    pub within_level: i64,
    /// Consecutive-day streak.
    pub streak: i64,
    /// Earned badges, in threshold order.
    pub badges: Vec<Badge>,
    /// Recent entries, oldest first.
    pub entries: Vec<EntryRow>,
    /// Fresh analysis to display, if one was just produced.
    pub analysis: Option<AnalysisView>,
    /// Inline warning (empty input, gateway diagnostic).
    pub warning: Option<String>,
}

/// A row of the recent-history table.
#[derive(Clone, Serialize)]
pub struct EntryRow {
    pub timestamp: String,
    pub mood_result: String,
    pub recommendation: String,
    pub mood_score: i64,
}

impl From<MoodEntry> for EntryRow {
    fn from(entry: MoodEntry) -> Self {
        Self {
            timestamp: entry.created_at,
            mood_result: entry.mood_result,
            recommendation: entry.recommendation,
            mood_score: entry.mood_score,
        }
    }
}

/// A freshly produced analysis.
#[derive(Clone, Serialize)]
pub struct AnalysisView {
    pub mood: String,
    pub recommendation: String,
    pub score: i64,
}

/// Mood submission form.
#[derive(Deserialize)]
pub struct AnalyzeForm {
    pub mood_text: String,
}

/// Progress snapshot returned by `/api/progress`.
#[derive(Serialize)]
pub struct ProgressView {
    pub xp: i64,
    pub streak: i64,
    pub level: i64,
    pub within_level: i64,
    pub badges: Vec<Badge>,
}

/// Query parameters for `/api/entries`.
#[derive(Deserialize)]
pub struct EntriesQuery {
    pub limit: Option<i64>,
}

/// Main view: the journal when signed in, the login page otherwise.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    match current_session(&state, &jar).await {
        Some(session) => {
            let page = journal_view(&state, &session, None, None).await?;
            Ok(page.into_response())
        }
        None => Ok(LoginTemplate::empty().into_response()),
    }
}

/// Analyze a mood submission.
///
/// On success the entry is appended to the ledger and daily activity applied
/// exactly once; on a gateway failure nothing is persisted and the diagnostic
/// is shown inline.
pub async fn analyze(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AnalyzeForm>,
) -> Result<Response> {
    let session = current_session(&state, &jar)
        .await
        .ok_or(AppError::Unauthorized)?;

    let text = form.mood_text.trim();
    if text.is_empty() {
        let page = journal_view(
            &state,
            &session,
            None,
            Some("Share what's on your mind first.".to_string()),
        )
        .await?;
        return Ok(page.into_response());
    }

    // Two independent gateway calls; a failure of either fails the analysis.
    let outcome = async {
        let mood = state.analyzer.classify(text).await?;
        let recommendation = state.analyzer.recommend(text).await?;
        Ok::<_, wellness_core::GatewayError>((mood, recommendation))
    }
    .await;

    let (mood, recommendation) = match outcome {
        Ok(pair) => pair,
        Err(err) => {
            warn!(analyzer = state.analyzer.name(), error = %err, "Mood analysis failed");
            let page = journal_view(&state, &session, None, Some(err.diagnostic())).await?;
            return Ok(page.into_response());
        }
    };

    let score = scorer::score(&mood);

    let entry = NewMoodEntry {
        user_id: session.user_id.clone(),
        name: session.name.clone(),
        age: session.age,
        user_type: session.user_type.as_str().to_string(),
        mood_text: text.to_string(),
        mood_result: mood.clone(),
        recommendation: recommendation.clone(),
        mood_score: score,
    };
    mood_entry::append_entry(state.db.pool(), &entry).await?;

    // The sole progress mutation per submission.
    let record = user::get_user(state.db.pool(), &session.user_id).await?;
    let today = Local::now().date_naive();
    let updated = progress::apply_daily_activity(record.progress(), today);
    user::record_progress(state.db.pool(), &session.user_id, &updated).await?;

    info!(user_id = %session.user_id, score, "Mood entry recorded");

    let analysis = AnalysisView {
        mood,
        recommendation,
        score,
    };
    let page = journal_view(&state, &session, Some(analysis), None).await?;
    Ok(page.into_response())
}

/// Progress snapshot as JSON.
pub async fn progress_api(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ProgressView>> {
    let session = current_session(&state, &jar)
        .await
        .ok_or(AppError::Unauthorized)?;

    let record = user::get_user(state.db.pool(), &session.user_id).await?;
    let (level, within_level) = progress::derive_level(record.xp);

    Ok(Json(ProgressView {
        xp: record.xp,
        streak: record.streak,
        level,
        within_level,
        badges: progress::badges_for(record.xp, record.streak),
    }))
}

/// Recent entries as JSON.
pub async fn entries_api(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<EntriesQuery>,
) -> Result<Json<Vec<EntryRow>>> {
    let session = current_session(&state, &jar)
        .await
        .ok_or(AppError::Unauthorized)?;

    let limit = query.limit.unwrap_or(HISTORY_TAIL).clamp(1, 100);
    let entries = mood_entry::tail_entries_for_user(state.db.pool(), &session.user_id, limit)
        .await?
        .into_iter()
        .map(EntryRow::from)
        .collect();

    Ok(Json(entries))
}

/// Assemble the journal page from current database state.
async fn journal_view(
    state: &AppState,
    session: &Session,
    analysis: Option<AnalysisView>,
    warning: Option<String>,
) -> Result<JournalTemplate> {
    let record = user::get_user(state.db.pool(), &session.user_id).await?;
    let (level, within_level) = progress::derive_level(record.xp);
    let badges = progress::badges_for(record.xp, record.streak);

    let entries = mood_entry::tail_entries_for_user(state.db.pool(), &session.user_id, HISTORY_TAIL)
        .await?
        .into_iter()
        .map(EntryRow::from)
        .collect();

    Ok(JournalTemplate {
        name: record.name,
        level,
        xp: record.xp,
        within_level,
        streak: record.streak,
        badges,
        entries,
        analysis,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStore, SESSION_COOKIE};
    use axum_extra::extract::cookie::Cookie;
    use database::{Database, NewUser};
    use mood_gateway::mock::MockAnalyzer;
    use std::sync::Arc;
    use std::time::Duration;
    use wellness_core::{MoodAnalyzer, DIAGNOSTIC_PREFIX};

    async fn test_state(analyzer: Arc<dyn MoodAnalyzer>) -> AppState {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        AppState::new(db, analyzer, SessionStore::new(Duration::from_secs(60)))
    }

    async fn signed_in_jar(state: &AppState) -> (CookieJar, String) {
        let new_user = NewUser {
            id: "user-1".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password_hash: String::new(),
            age: 25,
            user_type: "Student".to_string(),
        };
        user::create_user(state.db.pool(), &new_user).await.unwrap();

        let record = user::get_user(state.db.pool(), "user-1").await.unwrap();
        let token = state.sessions.create(&record).await;
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, token));
        (jar, "user-1".to_string())
    }

    #[tokio::test]
    async fn test_analyze_persists_entry_and_progress() {
        let state = test_state(Arc::new(MockAnalyzer::with_responses(
            "You sound Happy",
            "Movie: Up.",
        )))
        .await;
        let (jar, user_id) = signed_in_jar(&state).await;

        let form = Form(AnalyzeForm {
            mood_text: "great day".to_string(),
        });
        let response = analyze(State(state.clone()), jar.clone(), form)
            .await
            .unwrap();
        assert!(response.status().is_success());

        let entries = mood_entry::list_entries_for_user(state.db.pool(), &user_id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mood_result, "You sound Happy");
        assert_eq!(entries[0].mood_score, 5);

        let record = user::get_user(state.db.pool(), &user_id).await.unwrap();
        assert_eq!(record.xp, 10);
        assert_eq!(record.streak, 1);
    }

    #[tokio::test]
    async fn test_second_analysis_same_day_awards_no_more_xp() {
        let state = test_state(Arc::new(MockAnalyzer::new())).await;
        let (jar, user_id) = signed_in_jar(&state).await;

        for _ in 0..2 {
            let form = Form(AnalyzeForm {
                mood_text: "another thought".to_string(),
            });
            analyze(State(state.clone()), jar.clone(), form)
                .await
                .unwrap();
        }

        let record = user::get_user(state.db.pool(), &user_id).await.unwrap();
        assert_eq!(record.xp, 10);
        assert_eq!(record.streak, 1);

        // The ledger still gets every entry.
        let entries = mood_entry::list_entries_for_user(state.db.pool(), &user_id)
            .await
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_gateway_failure_persists_nothing() {
        let state = test_state(Arc::new(MockAnalyzer::failing())).await;
        let (jar, user_id) = signed_in_jar(&state).await;

        let form = Form(AnalyzeForm {
            mood_text: "anything".to_string(),
        });
        let response = analyze(State(state.clone()), jar, form).await.unwrap();
        assert!(response.status().is_success());

        let entries = mood_entry::list_entries_for_user(state.db.pool(), &user_id)
            .await
            .unwrap();
        assert!(entries.is_empty());

        let record = user::get_user(state.db.pool(), &user_id).await.unwrap();
        assert_eq!(record.xp, 0);
    }

    #[tokio::test]
    async fn test_analyze_without_session_is_unauthorized() {
        let state = test_state(Arc::new(MockAnalyzer::new())).await;

        let form = Form(AnalyzeForm {
            mood_text: "anything".to_string(),
        });
        let result = analyze(State(state), CookieJar::new(), form).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_diagnostic_prefix_surfaces_inline() {
        let err = MockAnalyzer::failing().classify("x").await.unwrap_err();
        assert!(err.diagnostic().starts_with(DIAGNOSTIC_PREFIX));
    }
}

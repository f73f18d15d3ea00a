//! PDF report download.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use database::mood_entry;
use report::{render_mood_report, REPORT_FILENAME};

use crate::error::{AppError, Result};
use crate::routes::current_session;
use crate::state::AppState;

/// Download the most recent entry as a PDF report.
///
/// With no entries yet there is nothing to report; bounce to the journal.
pub async fn download(State(state): State<AppState>, jar: CookieJar) -> Result<Response> {
    let session = current_session(&state, &jar)
        .await
        .ok_or(AppError::Unauthorized)?;

    let entry = match mood_entry::latest_entry_for_user(state.db.pool(), &session.user_id).await? {
        Some(entry) => entry,
        None => return Ok(Redirect::to("/").into_response()),
    };

    let bytes = render_mood_report(
        &entry.name,
        entry.age,
        &entry.user_type,
        &entry.mood_result,
        &entry.recommendation,
    );
    info!(user_id = %session.user_id, size = bytes.len(), "Report rendered");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", REPORT_FILENAME),
        ),
    ];
    Ok((headers, bytes).into_response())
}

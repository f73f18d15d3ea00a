//! Append-only mood ledger operations.

use sqlx::SqlitePool;

use crate::models::{MoodEntry, NewMoodEntry};
use crate::Result;

/// Append an entry to the ledger.
///
/// Entries are immutable once written; there is no update path.
pub async fn append_entry(pool: &SqlitePool, entry: &NewMoodEntry) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO mood_entries
            (user_id, name, age, user_type, mood_text, mood_result, recommendation, mood_score)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&entry.user_id)
    .bind(&entry.name)
    .bind(entry.age)
    .bind(&entry.user_type)
    .bind(&entry.mood_text)
    .bind(&entry.mood_result)
    .bind(&entry.recommendation)
    .bind(entry.mood_score)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get the most recent `limit` entries for a user, oldest first.
pub async fn tail_entries_for_user(
    pool: &SqlitePool,
    user_id: &str,
    limit: i64,
) -> Result<Vec<MoodEntry>> {
    let mut rows = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, user_id, created_at, name, age, user_type,
               mood_text, mood_result, recommendation, mood_score
        FROM mood_entries
        WHERE user_id = ?
        ORDER BY id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    // Fetched newest-first for the LIMIT; present in insertion order.
    rows.reverse();
    Ok(rows)
}

/// Get all entries for a user in insertion order (full scan for reporting).
pub async fn list_entries_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<MoodEntry>> {
    let rows = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, user_id, created_at, name, age, user_type,
               mood_text, mood_result, recommendation, mood_score
        FROM mood_entries
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get the most recent entry for a user, if any.
pub async fn latest_entry_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Option<MoodEntry>> {
    let row = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, user_id, created_at, name, age, user_type,
               mood_text, mood_result, recommendation, mood_score
        FROM mood_entries
        WHERE user_id = ?
        ORDER BY id DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Count total entries across all users.
pub async fn count_entries(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM mood_entries
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

//! Credential store operations.

use sqlx::SqlitePool;
use wellness_core::Progress;

use crate::error::{DatabaseError, Result};
use crate::models::{NewUser, User};

/// Create a new user.
///
/// Fails with [`DatabaseError::AlreadyExists`] when the email is taken; the
/// existing record is left untouched.
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (id, email, name, password_hash, age, user_type)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.password_hash)
    .bind(user.age)
    .bind(&user.user_type)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "User",
                    id: user.email.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a user by id.
pub async fn get_user(pool: &SqlitePool, id: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, last_activity_date,
               streak, xp, age, user_type, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: id.to_string(),
    })
}

/// Get a user by email.
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password_hash, last_activity_date,
               streak, xp, age, user_type, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: email.to_string(),
    })
}

/// Persist the progress engine's output for a user.
///
/// The engine decides the values; this is a plain write of its result.
pub async fn record_progress(pool: &SqlitePool, id: &str, progress: &Progress) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET last_activity_date = ?, streak = ?, xp = ?
        WHERE id = ?
        "#,
    )
    .bind(progress.last_activity_date)
    .bind(progress.streak)
    .bind(progress.xp)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "User",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Count total users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

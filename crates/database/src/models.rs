//! Database models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wellness_core::Progress;

/// A registered user, identified by a stable id with a unique email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Stable identifier (UUID string); mood entries reference this.
    pub id: String,
    /// Email address, unique across the system.
    pub email: String,
    /// Display name.
    pub name: String,
    /// PHC-format password hash.
    pub password_hash: String,
    /// Date of the last qualifying activity, if any.
    pub last_activity_date: Option<NaiveDate>,
    /// Consecutive-day streak.
    pub streak: i64,
    /// Cumulative experience points.
    pub xp: i64,
    /// Age given at signup.
    pub age: i64,
    /// User category ("Student", "Working", "Other").
    pub user_type: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl User {
    /// The user's gamification counters as a [`Progress`] value.
    pub fn progress(&self) -> Progress {
        Progress {
            last_activity_date: self.last_activity_date,
            streak: self.streak,
            xp: self.xp,
        }
    }
}

/// Fields needed to create a user. Progress counters start at zero.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Stable identifier (UUID string).
    pub id: String,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// PHC-format password hash.
    pub password_hash: String,
    /// Age given at signup.
    pub age: i64,
    /// User category.
    pub user_type: String,
}

/// An immutable mood ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    /// Auto-incrementing id; insertion order.
    pub id: i64,
    /// Owning user's id.
    pub user_id: String,
    /// Submission timestamp.
    pub created_at: String,
    /// Display name at submission time.
    pub name: String,
    /// Age at submission time.
    pub age: i64,
    /// User category at submission time.
    pub user_type: String,
    /// The user's free-form input.
    pub mood_text: String,
    /// Classification text from the analyzer.
    pub mood_result: String,
    /// Recommendation text from the analyzer.
    pub recommendation: String,
    /// Derived mood score in [1, 5].
    pub mood_score: i64,
}

/// Fields for appending a mood entry.
#[derive(Debug, Clone)]
pub struct NewMoodEntry {
    /// Owning user's id.
    pub user_id: String,
    /// Display name at submission time.
    pub name: String,
    /// Age at submission time.
    pub age: i64,
    /// User category at submission time.
    pub user_type: String,
    /// The user's free-form input.
    pub mood_text: String,
    /// Classification text from the analyzer.
    pub mood_result: String,
    /// Recommendation text from the analyzer.
    pub recommendation: String,
    /// Derived mood score in [1, 5].
    pub mood_score: i64,
}

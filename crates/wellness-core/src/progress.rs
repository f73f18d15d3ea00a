//! XP, streak, level, and badge derivation.
//!
//! [`apply_daily_activity`] is the sole mutator of XP and streak. It must be
//! invoked exactly once per successful mood submission and never on read paths.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// XP awarded for the first qualifying activity of a calendar day.
pub const XP_PER_ACTIVITY: i64 = 10;

/// XP required to advance one level.
pub const XP_PER_LEVEL: i64 = 100;

/// A user's gamification counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Date of the last qualifying activity, if any.
    pub last_activity_date: Option<NaiveDate>,
    /// Consecutive-day streak count.
    pub streak: i64,
    /// Cumulative experience points.
    pub xp: i64,
}

impl Progress {
    /// Progress for a freshly created user.
    pub fn new() -> Self {
        Self {
            last_activity_date: None,
            streak: 0,
            xp: 0,
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// A badge earned by crossing an XP or streak threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Short label, e.g. "XP Beginner".
    pub label: &'static str,
    /// Human-readable description of how it was earned.
    pub description: &'static str,
}

/// Apply one day's qualifying activity to a user's progress.
///
/// At most one increment per calendar day: if the last activity was already
/// `today`, the input is returned unchanged. Otherwise the streak continues
/// (+1) when the last activity was exactly yesterday and resets to 1 on any
/// gap, XP grows by [`XP_PER_ACTIVITY`], and the activity date moves to
/// `today`.
pub fn apply_daily_activity(progress: Progress, today: NaiveDate) -> Progress {
    if progress.last_activity_date == Some(today) {
        return progress;
    }

    let yesterday = today.checked_sub_days(Days::new(1));
    let streak = if progress.last_activity_date.is_some() && progress.last_activity_date == yesterday
    {
        progress.streak + 1
    } else {
        1
    };

    Progress {
        last_activity_date: Some(today),
        streak,
        xp: progress.xp + XP_PER_ACTIVITY,
    }
}

/// Derive `(level, progress_within_level)` from cumulative XP.
pub fn derive_level(xp: i64) -> (i64, i64) {
    (xp / XP_PER_LEVEL, xp % XP_PER_LEVEL)
}

/// Badges earned for the given totals, in fixed threshold order.
///
/// Totals are monotonic, so badges can only ever appear across recomputations,
/// never disappear.
pub fn badges_for(xp: i64, streak: i64) -> Vec<Badge> {
    let mut badges = Vec::new();
    if xp >= 100 {
        badges.push(Badge {
            label: "XP Beginner",
            description: "Earned 100+ XP",
        });
    }
    if xp >= 500 {
        badges.push(Badge {
            label: "XP Master",
            description: "Earned 500+ XP",
        });
    }
    if streak >= 3 {
        badges.push(Badge {
            label: "Streak Starter",
            description: "3-day streak",
        });
    }
    if streak >= 7 {
        badges.push(Badge {
            label: "Streak Champion",
            description: "7-day streak",
        });
    }
    badges
}

//! Core domain logic for the Manasaroha mood journal.
//!
//! This crate holds the pure pieces shared by the persistence layer, the
//! gateway client, and the web application:
//!
//! - [`scorer`] - mapping a free-text mood classification to a 1-5 score
//! - [`progress`] - XP, streaks, levels, and badges
//! - [`MoodAnalyzer`] - the trait any mood-analysis backend implements
//! - [`auth`] - salted password hashing and verification
//! - [`UserType`] - the closed set of account categories
//!
//! # Example
//!
//! ```rust
//! use wellness_core::{scorer, progress};
//!
//! let score = scorer::score("You sound Happy today");
//! assert_eq!(score, 5);
//!
//! let (level, within) = progress::derive_level(249);
//! assert_eq!((level, within), (2, 49));
//! ```

pub mod analyzer;
pub mod auth;
pub mod progress;
pub mod scorer;

mod user_type;

pub use analyzer::{GatewayError, MoodAnalyzer, DIAGNOSTIC_PREFIX};
pub use auth::AuthError;
pub use progress::{Badge, Progress, XP_PER_ACTIVITY, XP_PER_LEVEL};
pub use user_type::UserType;

// Re-export async_trait for implementors of MoodAnalyzer
pub use async_trait::async_trait;

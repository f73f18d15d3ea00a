//! Chat-completion gateway for the Manasaroha mood journal.
//!
//! [`CompletionClient`] implements [`wellness_core::MoodAnalyzer`] against a
//! hosted chat-completion API (OpenRouter by default): one call classifies the
//! user's mood, a second produces a movie/song/book recommendation. Responses
//! are memoized in a size-bounded cache keyed by a hash of the input text.
//!
//! # Example
//!
//! ```no_run
//! use mood_gateway::{CompletionClient, GatewayConfig};
//! use wellness_core::MoodAnalyzer;
//!
//! # async fn example() -> Result<(), wellness_core::GatewayError> {
//! let config = GatewayConfig::builder().api_key("sk-or-...").build();
//! let client = CompletionClient::new(config)?;
//!
//! let mood = client.classify("I can't stop smiling today").await?;
//! let picks = client.recommend("I can't stop smiling today").await?;
//! # Ok(())
//! # }
//! ```

mod api_types;
mod cache;
mod client;
mod config;
pub mod mock;

pub use cache::BoundedCache;
pub use client::CompletionClient;
pub use config::{GatewayConfig, GatewayConfigBuilder};

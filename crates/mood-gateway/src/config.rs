//! Configuration for the completion gateway.

use std::env;
use std::str::FromStr;

use tracing::warn;
use wellness_core::GatewayError;

/// Configuration for [`crate::CompletionClient`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API base URL.
    pub api_url: String,

    /// API key for bearer authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum cached responses (0 disables caching).
    pub cache_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: "https://openrouter.ai/api".to_string(),
            api_key: String::new(),
            model: "deepseek/deepseek-r1:free".to_string(),
            max_tokens: Some(1024),
            temperature: None,
            timeout_secs: 30,
            cache_capacity: 256,
        }
    }
}

impl GatewayConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MOOD_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `MOOD_API_URL` - API base URL (default: https://openrouter.ai/api)
    /// - `MOOD_API_MODEL` - Model name (default: deepseek/deepseek-r1:free)
    /// - `MOOD_API_MAX_TOKENS` - Max tokens (default: 1024)
    /// - `MOOD_API_TEMPERATURE` - Temperature (default: unset)
    /// - `MOOD_API_TIMEOUT_SECS` - Request timeout (default: 30)
    /// - `MOOD_API_CACHE_CAPACITY` - Cached responses, 0 disables (default: 256)
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = env::var("MOOD_API_KEY")
            .map_err(|_| GatewayError::Configuration("MOOD_API_KEY not set".to_string()))?;

        let api_url = env::var("MOOD_API_URL")
            .unwrap_or_else(|_| "https://openrouter.ai/api".to_string());

        let model = env::var("MOOD_API_MODEL")
            .unwrap_or_else(|_| "deepseek/deepseek-r1:free".to_string());

        let max_tokens = parse_var("MOOD_API_MAX_TOKENS").or(Some(1024));
        let temperature = parse_var("MOOD_API_TEMPERATURE");
        let timeout_secs = parse_var("MOOD_API_TIMEOUT_SECS").unwrap_or(30);
        let cache_capacity = parse_var("MOOD_API_CACHE_CAPACITY").unwrap_or(256);

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
            timeout_secs,
            cache_capacity,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }
}

/// Read and parse a numeric env var, warning when the value is unparseable
/// so the fallback to a default is visible in the logs.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {}: {:?}", name, raw);
            None
        }
    }
}

/// Builder for [`GatewayConfig`].
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the cache capacity (0 disables caching).
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GatewayConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayConfig::default();

        assert_eq!(config.api_url, "https://openrouter.ai/api");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "deepseek/deepseek-r1:free");
        assert_eq!(config.max_tokens, Some(1024));
        assert!(config.temperature.is_none());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.cache_capacity, 256);
    }

    #[test]
    fn test_builder_all_options() {
        let config = GatewayConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("some/model")
            .max_tokens(512)
            .temperature(0.5)
            .timeout_secs(10)
            .cache_capacity(16)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "some/model");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.5));
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.cache_capacity, 16);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_mood_vars() {
            std::env::remove_var("MOOD_API_KEY");
            std::env::remove_var("MOOD_API_URL");
            std::env::remove_var("MOOD_API_MODEL");
            std::env::remove_var("MOOD_API_MAX_TOKENS");
            std::env::remove_var("MOOD_API_TEMPERATURE");
            std::env::remove_var("MOOD_API_TIMEOUT_SECS");
            std::env::remove_var("MOOD_API_CACHE_CAPACITY");
        }

        // Missing API key should error
        clear_all_mood_vars();
        let result = GatewayConfig::from_env();
        assert!(matches!(result, Err(GatewayError::Configuration(_))));

        // Only API key set, defaults used
        clear_all_mood_vars();
        std::env::set_var("MOOD_API_KEY", "test-env-key");

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://openrouter.ai/api");
        assert_eq!(config.model, "deepseek/deepseek-r1:free");
        assert_eq!(config.timeout_secs, 30);

        // All vars set
        clear_all_mood_vars();
        std::env::set_var("MOOD_API_KEY", "full-test-key");
        std::env::set_var("MOOD_API_URL", "https://test.api.com");
        std::env::set_var("MOOD_API_MODEL", "test/model");
        std::env::set_var("MOOD_API_MAX_TOKENS", "2048");
        std::env::set_var("MOOD_API_TEMPERATURE", "0.9");
        std::env::set_var("MOOD_API_TIMEOUT_SECS", "5");
        std::env::set_var("MOOD_API_CACHE_CAPACITY", "0");

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "test/model");
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.temperature, Some(0.9));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.cache_capacity, 0);

        // Unparseable numeric values fall back to the defaults (with a
        // warning logged).
        clear_all_mood_vars();
        std::env::set_var("MOOD_API_KEY", "bad-values-key");
        std::env::set_var("MOOD_API_MAX_TOKENS", "lots");
        std::env::set_var("MOOD_API_TIMEOUT_SECS", "soon");
        std::env::set_var("MOOD_API_CACHE_CAPACITY", "-1");

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.max_tokens, Some(1024));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.cache_capacity, 256);

        // Cleanup
        clear_all_mood_vars();
    }
}

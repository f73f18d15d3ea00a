//! CompletionClient implementation against a hosted chat-completion API.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use wellness_core::{async_trait, GatewayError, MoodAnalyzer};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::cache::BoundedCache;
use crate::config::GatewayConfig;

/// System prompt for the mood classification call.
const CLASSIFY_SYSTEM_PROMPT: &str =
    "You are an AI assistant that detects user mood based on text input and provides recommendations.";

/// System prompt for the recommendation call.
const RECOMMEND_SYSTEM_PROMPT: &str =
    "You are a movie recommendation system. Based only on the user's mood, recommend one movie, one song, and one book.";

/// A [`MoodAnalyzer`] backed by a hosted chat-completion API.
///
/// Each submission makes two independent calls, one per system prompt.
/// Responses are memoized per input text in a bounded FIFO cache.
pub struct CompletionClient {
    client: Client,
    config: GatewayConfig,
    cache: BoundedCache,
}

impl CompletionClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let cache = BoundedCache::new(config.cache_capacity);

        info!(
            "CompletionClient initialized with model: {}, cache capacity: {}",
            config.model, config.cache_capacity
        );

        Ok(Self {
            client,
            config,
            cache,
        })
    }

    /// Create a client from environment variables.
    ///
    /// See [`GatewayConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, GatewayError> {
        let config = GatewayConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Run one completion call, consulting the cache first.
    async fn completion_with_cache(
        &self,
        kind: &str,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        let key = BoundedCache::key(kind, user_text);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(kind, "Cache hit");
            return Ok(cached);
        }

        let messages = vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_text),
        ];
        let content = self.chat_completion(messages).await?;

        self.cache.insert(key, content.clone()).await;
        Ok(content)
    }

    /// Make a chat completion request and extract the content.
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, GatewayError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to completion API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as a structured API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(GatewayError::UpstreamStatus {
                    status: status.as_u16(),
                    message: api_error.error.message,
                });
            }

            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            GatewayError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                warn!("No content in completion response");
                GatewayError::MalformedResponse("no content in response".to_string())
            })
    }
}

#[async_trait]
impl MoodAnalyzer for CompletionClient {
    async fn classify(&self, text: &str) -> Result<String, GatewayError> {
        self.completion_with_cache("classify", CLASSIFY_SYSTEM_PROMPT, text)
            .await
    }

    async fn recommend(&self, text: &str) -> Result<String, GatewayError> {
        self.completion_with_cache("recommend", RECOMMEND_SYSTEM_PROMPT, text)
            .await
    }

    fn name(&self) -> &str {
        "CompletionClient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_name() {
        let config = GatewayConfig::builder().api_key("test-key").build();
        let client = CompletionClient::new(config).unwrap();

        assert_eq!(client.name(), "CompletionClient");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Reserved TEST-NET-1 address; nothing listens there.
        let config = GatewayConfig::builder()
            .api_key("test-key")
            .api_url("http://192.0.2.1:9")
            .timeout_secs(1)
            .build();
        let client = CompletionClient::new(config).unwrap();

        let result = client.classify("hello").await;
        let err = result.unwrap_err();
        assert!(matches!(err, GatewayError::Network(_)));
        assert!(err.diagnostic().starts_with("API Error: "));
    }
}

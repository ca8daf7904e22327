//! HTTP client for the configured generation provider.

use std::time::Duration;

use crate::config::{LlmConfig, ProviderKind};
use crate::mock;
use crate::wire::{
    extract_chat_text, extract_generated_text, strip_code_fences, ChatCompletionRequest,
    ChatCompletionResponse, ChatMessage, ContentBlock, ContentPart, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig,
};

/// What the prompt is asking for; selects the mock payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Analysis,
    Creative,
}

/// Errors from the generation adapter.
///
/// The pipeline treats every variant the same way: log it and fall back
/// to mock output. None of these ever surface to the API caller.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("provider API error ({status}): {body}")]
    Api {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered 2xx but the envelope carried no usable
    /// text: unknown shape, empty payload, or safety rejection.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Client for a single configured generation endpoint.
pub struct LlmClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Build a client from adapter configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed (e.g. the TLS
    /// backend fails to initialise). Called once at startup, where
    /// misconfiguration should fail fast; a fallback client would drop
    /// the configured request timeout.
    pub fn new(config: LlmConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build generation HTTP client");
        Self { http, config }
    }

    /// Whether the adapter is running without credentials.
    pub fn is_mock_mode(&self) -> bool {
        self.config.api_key.is_none()
    }

    /// Send a prompt to the configured provider and return the generated
    /// text, with code fences already stripped.
    ///
    /// In mock mode this returns the canned placeholder payload without
    /// any network call. Transport and provider errors are returned to
    /// the caller, which substitutes mock output rather than failing the
    /// request.
    pub async fn generate(
        &self,
        kind: PromptKind,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::debug!("no API key configured, returning mock payload");
            return Ok(mock::payload(kind));
        };

        let raw = match self.config.provider {
            ProviderKind::ChatCompletions => self.chat_completion(api_key, prompt).await?,
            ProviderKind::GenerateContent => self.generate_content(api_key, prompt).await?,
        };

        Ok(strip_code_fences(&raw).to_string())
    }

    async fn chat_completion(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<ChatCompletionResponse>().await?;
        extract_chat_text(envelope)
    }

    async fn generate_content(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let body = GenerateContentRequest {
            contents: vec![ContentBlock {
                parts: vec![ContentPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, api_key
        );

        let response = self.http.post(url).json(&body).send().await?;

        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<GenerateContentResponse>().await?;
        extract_generated_text(envelope)
    }

    /// Ensure the response has a success status code, or return an
    /// [`GenerationError::Api`] containing the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MOCK_MARKER;

    #[tokio::test]
    async fn mock_mode_returns_placeholder_without_network() {
        let client = LlmClient::new(LlmConfig::mock());
        assert!(client.is_mock_mode());

        let text = client
            .generate(PromptKind::Analysis, "analyse this")
            .await
            .unwrap();
        assert!(text.contains(MOCK_MARKER));
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }

    #[tokio::test]
    async fn mock_payload_matches_prompt_kind() {
        let client = LlmClient::new(LlmConfig::mock());

        let analysis = client.generate(PromptKind::Analysis, "x").await.unwrap();
        let creative = client.generate(PromptKind::Creative, "x").await.unwrap();

        let analysis: serde_json::Value = serde_json::from_str(&analysis).unwrap();
        let creative: serde_json::Value = serde_json::from_str(&creative).unwrap();

        assert!(analysis.get("summary").is_some());
        assert!(creative.get("content").is_some());
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        let config = LlmConfig {
            api_key: Some("test-key".into()),
            base_url: "http://127.0.0.1:1".into(),
            timeout_secs: 1,
            ..LlmConfig::mock()
        };
        let client = LlmClient::new(config);

        let err = client.generate(PromptKind::Analysis, "x").await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
    }
}

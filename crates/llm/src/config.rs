//! Generation provider configuration.
//!
//! Provider selection happens once, from static configuration, before
//! any request is sent. Nothing here inspects response content to guess
//! a provider.

/// Which wire shape the configured endpoint speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Chat-completion style: `{model, messages, temperature, max_tokens}`
    /// in, `{choices:[{message:{content}}]}` out.
    ChatCompletions,
    /// Single-prompt style: `{contents:[{parts:[{text}]}]}` in,
    /// `{candidates:[{content:{parts:[{text}]}}]}` out.
    GenerateContent,
}

/// Static configuration for the generation adapter.
///
/// With `api_key = None` the adapter runs in mock mode: it never calls
/// out and returns canned placeholder JSON instead. This is a supported
/// mode, not an error path.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Load adapter configuration from environment variables.
    ///
    /// | Env Var            | Default                                      |
    /// |--------------------|----------------------------------------------|
    /// | `LLM_PROVIDER`     | `chat-completions` (`generate-content` also accepted) |
    /// | `LLM_API_KEY`      | unset -> mock mode                           |
    /// | `LLM_MODEL`        | `gpt-4o-mini`                                |
    /// | `LLM_BASE_URL`     | `https://api.openai.com/v1`                  |
    /// | `LLM_TEMPERATURE`  | `0.7`                                        |
    /// | `LLM_MAX_TOKENS`   | `1024`                                       |
    /// | `LLM_TIMEOUT_SECS` | `30`                                         |
    pub fn from_env() -> Self {
        let provider = match std::env::var("LLM_PROVIDER").as_deref() {
            Ok("generate-content") => ProviderKind::GenerateContent,
            _ => ProviderKind::ChatCompletions,
        };

        let api_key = std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty());

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());

        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());

        let temperature: f32 = std::env::var("LLM_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".into())
            .parse()
            .expect("LLM_TEMPERATURE must be a valid f32");

        let max_tokens: u32 = std::env::var("LLM_MAX_TOKENS")
            .unwrap_or_else(|_| "1024".into())
            .parse()
            .expect("LLM_MAX_TOKENS must be a valid u32");

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Self {
            provider,
            api_key,
            model,
            base_url,
            temperature,
            max_tokens,
            timeout_secs,
        }
    }

    /// A configuration with no API key, suitable for tests and local
    /// development: every generation call yields placeholder output.
    pub fn mock() -> Self {
        Self {
            provider: ProviderKind::ChatCompletions,
            api_key: None,
            model: "mock".into(),
            base_url: "http://localhost:0".into(),
            temperature: 0.7,
            max_tokens: 1024,
            timeout_secs: 30,
        }
    }
}

//! Typed wire shapes for the two supported provider APIs, plus the
//! envelope-unwrapping helpers that pull generated text out of them.

use serde::{Deserialize, Serialize};

use crate::client::GenerationError;

// ---------------------------------------------------------------------------
// Chat-completion shape
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

/// Extract the generated text from a chat-completion response.
pub fn extract_chat_text(response: ChatCompletionResponse) -> Result<String, GenerationError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            GenerationError::InvalidResponse("chat-completion response contained no text".into())
        })
}

// ---------------------------------------------------------------------------
// Generate-content shape
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<ContentBlock>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentBlock {
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<ContentBlock>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

/// Extract the generated text from a generate-content response.
///
/// Error envelopes, safety rejections, and empty payloads all surface as
/// [`GenerationError::InvalidResponse`]; the pipeline falls back to mock
/// output for any of them.
pub fn extract_generated_text(
    response: GenerateContentResponse,
) -> Result<String, GenerationError> {
    if let Some(error) = response.error {
        return Err(GenerationError::InvalidResponse(format!(
            "provider error envelope: {}",
            error.message.unwrap_or_else(|| "no message".into())
        )));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GenerationError::InvalidResponse(
            "generate-content response contained no candidates".into(),
        ));
    };

    // A candidate with a finish reason but no content is a safety or
    // length rejection.
    let Some(content) = candidate.content else {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unknown".into());
        return Err(GenerationError::InvalidResponse(format!(
            "candidate rejected without content (finishReason: {reason})"
        )));
    };

    if matches!(candidate.finish_reason.as_deref(), Some("SAFETY")) {
        return Err(GenerationError::InvalidResponse(
            "candidate rejected by safety filter".into(),
        ));
    }

    content
        .parts
        .into_iter()
        .find_map(|p| p.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            GenerationError::InvalidResponse("candidate parts contained no text".into())
        })
}

// ---------------------------------------------------------------------------
// Code-fence stripping
// ---------------------------------------------------------------------------

/// Strip a leading/trailing markdown code fence (``` with optional
/// `json` language tag) from provider output.
///
/// Models instructed to return raw JSON wrap it anyway often enough that
/// this runs on every response before parsing.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);

    rest.strip_suffix("```").map_or(rest, str::trim_end).trim_end_matches('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_text_is_extracted() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"{\"summary\":\"ok\"}"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_chat_text(response).unwrap(), "{\"summary\":\"ok\"}");
    }

    #[test]
    fn chat_empty_choices_is_invalid() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            extract_chat_text(response),
            Err(GenerationError::InvalidResponse(_))
        ));
    }

    #[test]
    fn chat_empty_content_is_invalid() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":""}}]}"#).unwrap();
        assert!(extract_chat_text(response).is_err());
    }

    #[test]
    fn generated_text_is_extracted() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{}"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(extract_generated_text(response).unwrap(), "{}");
    }

    #[test]
    fn error_envelope_is_invalid() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"error":{"message":"quota exceeded"}}"#).unwrap();
        let err = extract_generated_text(response).unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[test]
    fn safety_rejection_without_content_is_invalid() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        let err = extract_generated_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn safety_rejection_with_content_is_invalid() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"partial"}]},"finishReason":"SAFETY"}]}"#,
        )
        .unwrap();
        assert!(extract_generated_text(response).is_err());
    }

    #[test]
    fn empty_candidates_is_invalid() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_generated_text(response).is_err());
    }

    #[test]
    fn fences_with_language_tag_are_stripped() {
        let input = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(input), "{\"a\":1}");
    }

    #[test]
    fn fences_without_language_tag_are_stripped() {
        let input = "```\n{\"a\":1}\n```";
        assert_eq!(strip_code_fences(input), "{\"a\":1}");
    }

    #[test]
    fn unfenced_text_passes_through() {
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn unterminated_fence_still_strips_prefix() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}"), "{\"a\":1}");
    }
}

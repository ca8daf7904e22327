//! Canned placeholder payloads for mock mode.
//!
//! Returned when no API key is configured, and substituted by the
//! pipeline when a live provider call fails. Every payload carries the
//! literal "[placeholder]" marker so operators and tests can tell mock
//! output from live output.

use crate::client::PromptKind;

/// Marker substring present in every mock payload.
pub const MOCK_MARKER: &str = "[placeholder]";

const ANALYSIS_PAYLOAD: &str = r#"{
  "summary": "[placeholder] No live AI provider is configured. This is canned analysis output so the pipeline stays usable without credentials.",
  "strengths": ["Campaign data loaded successfully"],
  "weaknesses": ["AI analysis unavailable without provider credentials"],
  "recommendations": ["Configure LLM_API_KEY to enable live analysis"],
  "ideas": [],
  "suggestions": ["Set up a generation provider to replace this placeholder"]
}"#;

const CREATIVE_PAYLOAD: &str = r#"{
  "content": "[placeholder] No live AI provider is configured. These are canned creative ideas so the pipeline stays usable without credentials.",
  "ideas": [
    {
      "title": "Placeholder idea",
      "description": "Configure a generation provider to receive real creative ideas.",
      "type": "creative",
      "priority": 1,
      "tags": ["placeholder"],
      "rationale": "Generated in mock mode."
    }
  ],
  "suggestions": ["Set up a generation provider to replace this placeholder"]
}"#;

/// The canned payload for a given prompt kind.
pub fn payload(kind: PromptKind) -> String {
    match kind {
        PromptKind::Analysis => ANALYSIS_PAYLOAD.to_string(),
        PromptKind::Creative => CREATIVE_PAYLOAD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloads_are_valid_json_with_marker() {
        for kind in [PromptKind::Analysis, PromptKind::Creative] {
            let text = payload(kind);
            let value: serde_json::Value = serde_json::from_str(&text).unwrap();
            let marker_field = value
                .get("summary")
                .or_else(|| value.get("content"))
                .and_then(|v| v.as_str())
                .unwrap();
            assert!(marker_field.contains(MOCK_MARKER));
        }
    }
}

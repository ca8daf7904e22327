//! Strict parsing and defensive mapping of generation output.
//!
//! The provider's output is untrusted: syntactically valid JSON may
//! still omit fields, mistype them, or pad the idea list with junk.
//! Mapping substitutes empty-string/empty-list defaults for anything
//! absent and silently drops ideas without a non-empty title. A payload
//! with zero ideas and zero suggestions is valid.

use serde_json::Value;

use crate::error::CoreError;
use crate::repair::repair_truncated_json;
use crate::suggestion::Idea;

/// Maximum number of characters of raw provider output carried in an
/// [`CoreError::Unparseable`] for diagnostics.
const EXCERPT_LEN: usize = 300;

/// The qualitative fields extracted from a parsed provider payload.
///
/// Numeric performance figures are intentionally absent: those are
/// always computed locally from campaign rows by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPayload {
    pub summary: String,
    pub content: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub suggestions: Vec<String>,
    pub ideas: Vec<Idea>,
}

/// Repair and strictly parse raw provider text, then map it into a
/// [`ParsedPayload`].
///
/// Parse failure after repair is terminal for the request: no further
/// recovery is attempted and the error carries a bounded excerpt of the
/// *original* raw text.
pub fn parse_payload(raw: &str) -> Result<ParsedPayload, CoreError> {
    let repaired = repair_truncated_json(raw);
    let value: Value = serde_json::from_str(&repaired).map_err(|_| CoreError::Unparseable {
        excerpt: excerpt(raw),
    })?;
    Ok(map_payload(&value))
}

/// Bounded excerpt of raw output, truncated on a char boundary.
fn excerpt(raw: &str) -> String {
    raw.chars().take(EXCERPT_LEN).collect()
}

/// Map known top-level fields out of a parsed JSON value, defaulting
/// everything absent.
fn map_payload(value: &Value) -> ParsedPayload {
    ParsedPayload {
        summary: string_field(value, "summary"),
        content: string_field(value, "content"),
        strengths: string_list(value, "strengths"),
        weaknesses: string_list(value, "weaknesses"),
        recommendations: string_list(value, "recommendations"),
        suggestions: string_list(value, "suggestions"),
        ideas: idea_list(value),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Extract the `ideas` array, dropping entries without a non-empty title
/// (treated as noise, not an error).
fn idea_list(value: &Value) -> Vec<Idea> {
    value
        .get("ideas")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(map_idea).collect())
        .unwrap_or_default()
}

fn map_idea(value: &Value) -> Option<Idea> {
    let title = string_field(value, "title");
    if title.is_empty() {
        return None;
    }

    // Creative payloads use "type" where analysis payloads use "category".
    let category = match string_field(value, "category") {
        c if c.is_empty() => string_field(value, "type"),
        c => c,
    };

    Some(Idea {
        title,
        description: string_field(value, "description"),
        category,
        // Passed through unvalidated; out-of-range values survive.
        priority: value.get("priority").and_then(Value::as_i64).unwrap_or(0) as i32,
        tags: string_list(value, "tags"),
        rationale: value
            .get("rationale")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_maps_losslessly() {
        let raw = json!({
            "summary": "On track",
            "content": "Analysis text",
            "strengths": ["pacing"],
            "weaknesses": ["reach"],
            "recommendations": ["shift spend"],
            "suggestions": ["try video"],
            "ideas": [{
                "title": "Billboard blitz",
                "description": "High-traffic placements",
                "category": "outdoor",
                "priority": 2,
                "tags": ["ooh", "q3"],
                "rationale": "Strong local awareness"
            }]
        })
        .to_string();

        let payload = parse_payload(&raw).unwrap();
        assert_eq!(payload.summary, "On track");
        assert_eq!(payload.content, "Analysis text");
        assert_eq!(payload.strengths, vec!["pacing"]);
        assert_eq!(payload.weaknesses, vec!["reach"]);
        assert_eq!(payload.recommendations, vec!["shift spend"]);
        assert_eq!(payload.suggestions, vec!["try video"]);
        assert_eq!(payload.ideas.len(), 1);
        let idea = &payload.ideas[0];
        assert_eq!(idea.title, "Billboard blitz");
        assert_eq!(idea.category, "outdoor");
        assert_eq!(idea.priority, 2);
        assert_eq!(idea.rationale.as_deref(), Some("Strong local awareness"));
    }

    #[test]
    fn parsing_is_idempotent_for_valid_input() {
        let raw = json!({"summary": "ok", "suggestions": ["a", "b"]}).to_string();
        let first = parse_payload(&raw).unwrap();
        let second = parse_payload(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_fields_default_to_empty_not_null() {
        let payload = parse_payload("{}").unwrap();
        assert_eq!(payload.summary, "");
        assert_eq!(payload.content, "");
        assert!(payload.strengths.is_empty());
        assert!(payload.weaknesses.is_empty());
        assert!(payload.recommendations.is_empty());
        assert!(payload.suggestions.is_empty());
        assert!(payload.ideas.is_empty());
    }

    #[test]
    fn zero_ideas_and_zero_suggestions_is_valid() {
        let raw = json!({"summary": "quiet week", "ideas": [], "suggestions": []}).to_string();
        let payload = parse_payload(&raw).unwrap();
        assert_eq!(payload.summary, "quiet week");
        assert!(payload.ideas.is_empty());
        assert!(payload.suggestions.is_empty());
    }

    #[test]
    fn idea_without_title_is_dropped() {
        let raw = json!({
            "ideas": [
                {"description": "no title here"},
                {"title": "", "description": "empty title"},
                {"title": "Keeper"}
            ]
        })
        .to_string();

        let payload = parse_payload(&raw).unwrap();
        assert_eq!(payload.ideas.len(), 1);
        assert_eq!(payload.ideas[0].title, "Keeper");
        assert_eq!(payload.ideas[0].description, "");
    }

    #[test]
    fn idea_type_key_fills_category() {
        let raw = json!({"ideas": [{"title": "X", "type": "tagline"}]}).to_string();
        let payload = parse_payload(&raw).unwrap();
        assert_eq!(payload.ideas[0].category, "tagline");
    }

    #[test]
    fn out_of_range_priority_passes_through() {
        let raw = json!({"ideas": [{"title": "X", "priority": 7}]}).to_string();
        let payload = parse_payload(&raw).unwrap();
        assert_eq!(payload.ideas[0].priority, 7);
    }

    #[test]
    fn truncated_payload_is_repaired_then_parsed() {
        let raw = r#"{"summary":"ok","strengths":["a""#;
        let payload = parse_payload(raw).unwrap();
        assert_eq!(payload.summary, "ok");
        assert_eq!(payload.strengths, vec!["a"]);
    }

    #[test]
    fn unparseable_output_yields_bounded_excerpt() {
        let raw = "I'm sorry, but ".repeat(100);
        let err = parse_payload(&raw).unwrap_err();
        match err {
            CoreError::Unparseable { excerpt } => {
                assert_eq!(excerpt.chars().count(), 300);
                assert!(excerpt.starts_with("I'm sorry"));
            }
            other => panic!("expected Unparseable, got {other:?}"),
        }
    }

    #[test]
    fn non_string_array_entries_are_skipped() {
        let raw = json!({"suggestions": ["keep", 42, null, "this"]}).to_string();
        let payload = parse_payload(&raw).unwrap();
        assert_eq!(payload.suggestions, vec!["keep", "this"]);
    }
}

//! Heuristic recovery for truncated generation output.
//!
//! Models instructed to emit raw JSON sometimes stop mid-structure when
//! they hit a token limit. This module closes whatever was left open so
//! the strict parser gets a chance. It is deliberately *not* a grammar
//! repair: it never fixes malformed nesting, only appends the closing
//! characters needed to balance counts. Changing this (e.g. attempting
//! smarter repairs) changes observable behaviour and is off the table.

/// Close unbalanced `[` and `{` at the end of `text`.
///
/// If the trimmed text already ends in `}` or `]` it is returned
/// untouched. Otherwise the missing `]`s are appended first, then the
/// missing `}`s, so a truncated `{"a":["b"` becomes `{"a":["b"]}`.
pub fn repair_truncated_json(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with('}') || trimmed.ends_with(']') {
        return trimmed.to_string();
    }

    let open_braces = trimmed.matches('{').count() as i64 - trimmed.matches('}').count() as i64;
    let open_brackets = trimmed.matches('[').count() as i64 - trimmed.matches(']').count() as i64;

    let mut repaired = trimmed.to_string();
    for _ in 0..open_brackets.max(0) {
        repaired.push(']');
    }
    for _ in 0..open_braces.max(0) {
        repaired.push('}');
    }
    repaired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_object_is_untouched() {
        let input = r#"{"summary":"ok"}"#;
        assert_eq!(repair_truncated_json(input), input);
    }

    #[test]
    fn complete_array_is_untouched() {
        let input = r#"[1, 2, 3]"#;
        assert_eq!(repair_truncated_json(input), input);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(repair_truncated_json("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn truncated_array_inside_object_closes_bracket_before_brace() {
        let repaired = repair_truncated_json(r#"{"summary":"ok","strengths":["a""#);
        // Brackets are appended before braces: the output must end `]}`.
        assert_eq!(repaired, r#"{"summary":"ok","strengths":["a"]}"#);
        let parsed: serde_json::Value = serde_json::from_str(&repaired).unwrap();
        assert_eq!(parsed["strengths"][0], "a");
    }

    #[test]
    fn nested_truncation_appends_flat_closers_only() {
        // All `]`s are appended before all `}`s, without re-interleaving.
        // For doubly-nested truncation the result can still be invalid
        // JSON; the parser then rejects it. That is accepted behaviour.
        let repaired = repair_truncated_json(r#"{"ideas":[{"title":"x","tags":["a","b""#);
        assert_eq!(repaired, r#"{"ideas":[{"title":"x","tags":["a","b"]]}}"#);
    }

    #[test]
    fn text_ending_in_bracket_is_not_repaired_even_if_unbalanced() {
        // The heuristic only fires when the text does not already end in
        // a closing character. `{"a":["x"]` ends in `]` and stays broken.
        let input = r#"{"a":["x"]"#;
        assert_eq!(repair_truncated_json(input), input);
    }

    #[test]
    fn non_json_text_gains_no_closers() {
        assert_eq!(repair_truncated_json("sorry, I can't do that"), "sorry, I can't do that");
    }
}

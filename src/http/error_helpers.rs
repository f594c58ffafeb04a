//! Formatting helpers for error context.

/// Maximum bytes of a response body quoted in an error message.
const BODY_PREVIEW_LENGTH: usize = 200;

/// Describes a body that failed to decode as `target`, quoting the start of it.
pub(crate) fn format_decode_error(body: &[u8], target: &str, error: &serde_json::Error) -> String {
    let text = String::from_utf8_lossy(body);
    let preview = truncate_for_context(&text, BODY_PREVIEW_LENGTH);
    format!("failed to decode {target}: {error} | Context: {preview}")
}

/// Truncates a string to `max_len` bytes, adding "..." if truncated.
///
/// Never splits a multi-byte character.
pub(crate) fn truncate_for_context(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let truncate_at = s
            .char_indices()
            .take_while(|(i, c)| i + c.len_utf8() <= max_len)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &s[..truncate_at])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_context_short_string() {
        assert_eq!(truncate_for_context("Short", 100), "Short");
    }

    #[test]
    fn test_truncate_for_context_long_string() {
        let long_str = "a".repeat(300);
        let result = truncate_for_context(&long_str, 200);
        assert_eq!(result.len(), 203);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_for_context_utf8_boundary() {
        // 198 + 4 = 202 bytes; the emoji must not be split
        let emoji_str = "x".repeat(198) + "🎉";
        let result = truncate_for_context(&emoji_str, 200);
        assert_eq!(result.len(), 201);
        assert!(!result.contains("🎉"));
    }

    #[test]
    fn test_format_decode_error_quotes_body() {
        let body = br#"{"id": 12"#;
        let err = serde_json::from_slice::<serde_json::Value>(body).unwrap_err();
        let message = format_decode_error(body, "Album", &err);
        assert!(message.contains("failed to decode Album"));
        assert!(message.contains(r#"{"id": 12"#));
    }
}

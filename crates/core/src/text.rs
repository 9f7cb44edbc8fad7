//! Small text helpers for response shaping.

/// Truncate a string to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_untouched() {
        assert_eq!(truncate_chars("hello", 140), "hello");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncates_at_char_count() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn test_multibyte_boundary() {
        // Each of these is a single char but multiple bytes.
        assert_eq!(truncate_chars("héllö wörld", 4), "héll");
        assert_eq!(truncate_chars("日本語テスト", 3), "日本語");
    }
}

//! Default avatar URL generation.
//!
//! New accounts without an uploaded avatar get a deterministic
//! ui-avatars.com image derived from the display name.

const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Build the default avatar URL for a display name.
pub fn default_avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_BASE}?name={}&background=3b82f6&color=fff",
        encode_query_component(name)
    )
}

/// Percent-encode a string for use as a URL query component.
///
/// Everything outside the unreserved set (RFC 3986 §2.3) is encoded.
pub fn encode_query_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            other => {
                out.push('%');
                out.push_str(&format!("{other:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(encode_query_component("Alice"), "Alice");
    }

    #[test]
    fn test_spaces_and_symbols_encoded() {
        assert_eq!(encode_query_component("Ada Lovelace"), "Ada%20Lovelace");
        assert_eq!(encode_query_component("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn test_multibyte_names_encoded() {
        assert_eq!(encode_query_component("José"), "Jos%C3%A9");
    }

    #[test]
    fn test_default_avatar_url() {
        let url = default_avatar_url("Ada Lovelace");
        assert_eq!(
            url,
            "https://ui-avatars.com/api/?name=Ada%20Lovelace&background=3b82f6&color=fff"
        );
    }
}

//! Percent-encoding for URL path segments
//!
//! Mirrors `encodeURIComponent`: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
//! is escaped as UTF-8 `%XX` triplets.

use std::fmt::Write;

/// Percent-encode a string for interpolation into a single path segment
pub fn encode_path_segment(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);
    for b in input.bytes() {
        match b {
            b'a'..=b'z'
            | b'A'..=b'Z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => result.push(char::from(b)),
            _ => {
                let _ = write!(result, "%{b:02X}");
            },
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_plain_name() {
        assert_eq!(encode_path_segment("default-light-standard"), "default-light-standard");
    }

    #[test]
    fn encode_space_and_slash() {
        assert_eq!(encode_path_segment("my style/v2"), "my%20style%2Fv2");
    }

    #[test]
    fn encode_reserved_chars() {
        assert_eq!(encode_path_segment("a&b=c?d#e"), "a%26b%3Dc%3Fd%23e");
    }

    #[test]
    fn encode_keeps_component_marks() {
        assert_eq!(encode_path_segment("!~*'()._-"), "!~*'()._-");
    }

    #[test]
    fn encode_unicode() {
        assert_eq!(encode_path_segment("बेंगलुरु").len(), "बेंगलुरु".len() * 3);
        assert!(encode_path_segment("München").starts_with("M%C3%BC"));
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode_path_segment(""), "");
    }
}

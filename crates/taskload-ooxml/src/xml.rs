//! XML text helpers

use std::borrow::Cow;

/// Whether `c` may appear in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape special XML characters in text and attribute values.
///
/// Characters XML 1.0 forbids (most C0 controls, `U+FFFE`, `U+FFFF`) are
/// dropped, since workbook text may carry them.
pub fn escape(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        return quick_xml::escape::escape(text);
    }

    let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    Cow::Owned(quick_xml::escape::escape(&cleaned).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Hello & World"), "Hello &amp; World");
        assert_eq!(escape("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("Отдел"), "Отдел");
    }

    #[test]
    fn test_escape_drops_forbidden_characters() {
        assert_eq!(escape("Sales\u{b}North"), "SalesNorth");
        assert_eq!(escape("Smir\u{1}nov & Co"), "Smirnov &amp; Co");
        assert_eq!(escape("a\u{0}b\u{fffe}c\u{ffff}"), "abc");
    }

    #[test]
    fn test_escape_keeps_allowed_whitespace_and_astral() {
        assert_eq!(escape("a\tb\nc\rd"), "a\tb\nc\rd");
        assert_eq!(escape("\u{1F600}\u{E000}"), "\u{1F600}\u{E000}");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }
}

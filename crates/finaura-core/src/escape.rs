//! HTML escaping for text and attribute values.

/// Escape for embedding in HTML attribute values.
///
/// Escapes: `& < > " '`
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape for embedding in HTML element content (e.g., `<title>`).
///
/// Only escapes `& < >`; quotes are safe in element text.
#[must_use]
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_attr_all_chars() {
        assert_eq!(
            escape_attr("a<b>c&d\"e'f"),
            "a&lt;b&gt;c&amp;d&quot;e&#x27;f"
        );
    }

    #[test]
    fn escape_text_keeps_quotes() {
        assert_eq!(escape_text("a<b>c&d\"e'f"), "a&lt;b&gt;c&amp;d\"e'f");
    }

    #[test]
    fn german_copy_passes_through() {
        let s = "Säule 3a – So funktioniert’s";
        assert_eq!(escape_text(s), s);
    }
}

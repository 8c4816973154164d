//! Utility functions for class lists and HTML escaping.

/// Joins class fragments with single spaces, skipping empty ones.
///
/// Fragments are trimmed but never de-duplicated: later classes must stay
/// later so they win over conflicting utilities.
///
/// # Example
///
/// ```rust
/// use stylekit::class_names;
///
/// assert_eq!(class_names(["btn", "", " h-8 ", "w-full"]), "btn h-8 w-full");
/// ```
pub fn class_names<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Escapes text for use as HTML element content or a quoted attribute value.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names(["", "a", "  ", "b"]), "a b");
    }

    #[test]
    fn test_class_names_keeps_duplicates_in_order() {
        assert_eq!(class_names(["p-2", "p-4", "p-2"]), "p-2 p-4 p-2");
    }

    #[test]
    fn test_class_names_empty() {
        assert_eq!(class_names(Vec::<String>::new()), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text"), "plain text");
    }
}

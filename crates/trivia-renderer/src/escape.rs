//! Text handling for values spliced into markup.

use std::borrow::Cow;

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// How document text is written into markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextPolicy {
    /// Splice text unchanged. Document authors may embed markup.
    #[default]
    Verbatim,
    /// Escape HTML special characters.
    Escaped,
}

impl TextPolicy {
    /// Prepare `text` for splicing.
    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(text),
            Self::Escaped => escape_html(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_plain_text_borrows() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_verbatim_policy_keeps_markup() {
        assert_eq!(TextPolicy::Verbatim.apply("<b>4</b>"), "<b>4</b>");
        assert_eq!(TextPolicy::Escaped.apply("<b>4</b>"), "&lt;b&gt;4&lt;/b&gt;");
    }
}

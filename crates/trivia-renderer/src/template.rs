//! Page template with `$title`, `$description` and `$content` placeholders.
//!
//! A template is split into literal and placeholder segments once, at parse
//! time. Rendering walks the segments, so every occurrence of a placeholder is
//! substituted and substituted text is never scanned for placeholders again.

use crate::renderer::RenderedContent;

/// The page template bundled with the crate.
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/trivia.html");

/// Named insertion point in a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Description,
    Content,
}

impl Placeholder {
    const ALL: [Self; 3] = [Self::Title, Self::Description, Self::Content];

    /// Token as it appears in template text.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Title => "$title",
            Self::Description => "$description",
            Self::Content => "$content",
        }
    }
}

/// Error returned when a template cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Without a content placeholder the rendered items would be dropped.
    #[error("Template has no {} placeholder", .0.token())]
    MissingPlaceholder(Placeholder),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Parsed page template.
#[derive(Clone, Debug)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut cursor = 0;

        while let Some(offset) = text[cursor..].find('$') {
            let at = cursor + offset;
            let rest = &text[at..];
            match Placeholder::ALL
                .into_iter()
                .find(|p| rest.starts_with(p.token()))
            {
                Some(placeholder) => {
                    if literal_start < at {
                        segments.push(Segment::Literal(text[literal_start..at].to_owned()));
                    }
                    segments.push(Segment::Placeholder(placeholder));
                    cursor = at + placeholder.token().len();
                    literal_start = cursor;
                }
                None => cursor = at + 1,
            }
        }
        if literal_start < text.len() {
            segments.push(Segment::Literal(text[literal_start..].to_owned()));
        }

        let template = Self { segments };
        if !template.contains(Placeholder::Content) {
            return Err(TemplateError::MissingPlaceholder(Placeholder::Content));
        }
        for placeholder in [Placeholder::Title, Placeholder::Description] {
            if !template.contains(placeholder) {
                tracing::warn!(
                    placeholder = placeholder.token(),
                    "template does not use placeholder"
                );
            }
        }
        Ok(template)
    }

    /// Parse the bundled template.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::parse(BUILTIN_TEMPLATE)
    }

    /// Whether `placeholder` occurs at least once.
    #[must_use]
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| *s == Segment::Placeholder(placeholder))
    }

    /// Substitute rendered content into every placeholder occurrence.
    #[must_use]
    pub fn render(&self, content: &RenderedContent) -> String {
        let mut out = String::with_capacity(self.literal_len() + content.content.len() + 256);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(Placeholder::Title) => out.push_str(&content.title),
                Segment::Placeholder(Placeholder::Description) => {
                    out.push_str(&content.description);
                }
                Segment::Placeholder(Placeholder::Content) => out.push_str(&content.content),
            }
        }
        out
    }

    fn literal_len(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(text) => text.len(),
                Segment::Placeholder(_) => 0,
            })
            .sum()
    }
}

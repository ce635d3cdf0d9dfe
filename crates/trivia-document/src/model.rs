//! Resolved document model.
//!
//! Every value here has already passed load-time checks: answers have exactly
//! one variant and multimedia references point at real objects.

use std::borrow::Cow;
use std::sync::Arc;

/// One question and its answer, with optional media.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Question text, `None` when absent from the input.
    pub question: Option<String>,
    /// Expected answer.
    pub answer: Answer,
    /// Media in input order. Indirect references are already substituted.
    pub multimedia: Vec<Arc<Multimedia>>,
}

impl Item {
    /// Question text, empty when absent.
    #[must_use]
    pub fn question_text(&self) -> &str {
        self.question.as_deref().unwrap_or_default()
    }
}

/// Expected answer to a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    /// Exact text.
    Literal(String),
    /// Any response matching a regular expression.
    RegexMatch(String),
    /// Label of a multiple-choice option.
    Choice(String),
    /// All of the listed answers.
    Conjunction(Vec<String>),
    /// Any of the listed answers.
    Disjunction(Vec<String>),
    /// At least `n` of the listed answers.
    ThresholdOf { n: u64, of: Vec<String> },
}

/// Kind of media object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    /// Any other `type` value. Kept so the renderer can skip it.
    Other(String),
}

impl MediaKind {
    pub(crate) fn parse(kind: &str) -> Self {
        match kind {
            "image" => Self::Image,
            "audio" => Self::Audio,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// A media object with one or more alternative sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multimedia {
    pub kind: MediaKind,
    /// Never empty.
    pub sources: Vec<MediaSource>,
}

impl Multimedia {
    /// The source images are shown from.
    #[must_use]
    pub fn primary_source(&self) -> &MediaSource {
        &self.sources[0]
    }
}

/// Where the bytes of a media object come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaSource {
    /// Externally located content.
    Uri {
        uri: String,
        mimetype: Option<String>,
    },
    /// Base64 payload embedded in the document.
    Inline { mimetype: String, data: String },
}

impl MediaSource {
    /// URI to reference from markup: the location itself, or a `data:` URI.
    #[must_use]
    pub fn display_uri(&self) -> Cow<'_, str> {
        match self {
            Self::Uri { uri, .. } => Cow::Borrowed(uri),
            Self::Inline { mimetype, data } => Cow::Owned(format!("data:{mimetype};base64,{data}")),
        }
    }

    /// Media type, when known.
    #[must_use]
    pub fn mimetype(&self) -> Option<&str> {
        match self {
            Self::Uri { mimetype, .. } => mimetype.as_deref(),
            Self::Inline { mimetype, .. } => Some(mimetype),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_uri_source_displays_location() {
        let source = MediaSource::Uri {
            uri: "http://a/b.png".to_owned(),
            mimetype: None,
        };
        assert_eq!(source.display_uri(), "http://a/b.png");
        assert_eq!(source.mimetype(), None);
    }

    #[test]
    fn test_inline_source_displays_data_uri() {
        let source = MediaSource::Inline {
            mimetype: "image/png".to_owned(),
            data: "QQ==".to_owned(),
        };
        assert_eq!(source.display_uri(), "data:image/png;base64,QQ==");
        assert_eq!(source.mimetype(), Some("image/png"));
    }

    #[test]
    fn test_media_kind_parse() {
        assert_eq!(MediaKind::parse("image"), MediaKind::Image);
        assert_eq!(MediaKind::parse("audio"), MediaKind::Audio);
        assert_eq!(
            MediaKind::parse("video"),
            MediaKind::Other("video".to_owned())
        );
    }

    #[test]
    fn test_missing_question_is_empty() {
        let item = Item {
            question: None,
            answer: Answer::Literal("4".to_owned()),
            multimedia: Vec::new(),
        };
        assert_eq!(item.question_text(), "");
    }
}

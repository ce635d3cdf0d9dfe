//! Document loading errors.

use std::fmt;

/// Where a multimedia object was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaLocation {
    /// Inline in an item's multimedia list.
    Item { item: usize, position: usize },
    /// In the document-level table under a key.
    Shared(String),
}

impl fmt::Display for MediaLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item { item, position } => write!(f, "item {item}, multimedia {position}"),
            Self::Shared(key) => write!(f, "multimedia \"{key}\""),
        }
    }
}

/// Error returned when a document cannot be loaded.
///
/// Item indexes are zero-based, matching the reveal index in rendered output.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Input is not JSON or does not have the document's shape.
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// More than one answer variant field is set.
    #[error("Item {item}: answer sets conflicting fields {}", fields.join(", "))]
    ConflictingAnswer {
        item: usize,
        fields: Vec<&'static str>,
    },

    /// A variant field is set but its companion data is unusable.
    #[error("Item {item}: invalid answer: {message}")]
    InvalidAnswer { item: usize, message: String },

    /// The answer object matches none of the known variants.
    #[error("Item {item}: answer has no recognized shape")]
    UnrecognizedAnswerShape { item: usize },

    /// An `mmref` names a key missing from the document-level table.
    #[error("Item {item}: multimedia reference \"{key}\" is not defined")]
    UnresolvedReference { item: usize, key: String },

    /// A multimedia object lists no sources.
    #[error("{location}: no sources")]
    EmptySources { location: MediaLocation },

    /// A source has neither a `uri` nor `mimetype` plus `data`.
    #[error("{location}: source {index} needs a uri or mimetype and data")]
    InvalidSource {
        location: MediaLocation,
        index: usize,
    },

    /// Inline `data` is not valid base64.
    #[error("{location}: source {index} has invalid base64 data: {message}")]
    InvalidMediaData {
        location: MediaLocation,
        index: usize,
        message: String,
    },
}

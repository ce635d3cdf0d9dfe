//! Typed trivia document model.
//!
//! [`TriviaDocument`] is built from JSON in one pass that settles everything
//! the input leaves implicit:
//! - answers become an [`Answer`] variant, and conflicting variant fields are
//!   rejected instead of being resolved by check order
//! - `mmref` indirections are looked up in the document-level multimedia
//!   table, so dangling references fail at load time
//! - media sources are classified as [`MediaSource::Uri`] or
//!   [`MediaSource::Inline`], with inline base64 payloads checked
//!
//! # Example
//!
//! ```
//! use trivia_document::{Answer, TriviaDocument};
//!
//! let doc = TriviaDocument::from_json(r#"{"items": [{"answer": {"choice": "B"}}]}"#).unwrap();
//! assert_eq!(doc.items()[0].answer, Answer::Choice("B".to_owned()));
//! ```

mod document;
mod error;
mod model;
mod raw;

pub use document::TriviaDocument;
pub use error::{DocumentError, MediaLocation};
pub use model::{Answer, Item, MediaKind, MediaSource, Multimedia};

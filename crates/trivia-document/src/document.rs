//! Loading a trivia document into the resolved model.

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;

use crate::error::{DocumentError, MediaLocation};
use crate::model::{Answer, Item, MediaKind, MediaSource, Multimedia};
use crate::raw::{
    RawAnswer, RawAnswerFields, RawDocument, RawItem, RawMultimedia, RawMultimediaRef, RawSource,
};

/// Standard alphabet, padding optional. Whitespace is stripped before decoding.
const INLINE_DATA: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A loaded trivia document.
///
/// Construction resolves everything the renderer needs: answers are typed,
/// and `mmref` indirections are replaced by the shared object they name.
/// A document that loads can always be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriviaDocument {
    title: Option<String>,
    description: Option<String>,
    items: Vec<Item>,
    multimedia: BTreeMap<String, Arc<Multimedia>>,
}

impl TriviaDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Build a document from an already-parsed JSON value.
    ///
    /// Fails on the first unusable item; no partial document is produced.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self, DocumentError> {
        let mut shared = SharedMedia::new(raw.multimedia);

        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| resolve_item(index, item, &mut shared))
            .collect::<Result<Vec<_>, _>>()?;

        if !shared.pending.is_empty() {
            tracing::debug!(
                unreferenced = shared.pending.len(),
                "skipping shared multimedia no item references"
            );
        }
        let multimedia = shared.resolved;

        tracing::debug!(
            items = items.len(),
            shared_media = multimedia.len(),
            "loaded trivia document"
        );

        Ok(Self {
            title: non_empty(raw.title),
            description: non_empty(raw.description),
            items,
            multimedia,
        })
    }

    /// Title set by the document, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Description set by the document, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Items in document order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Shared multimedia objects by key.
    ///
    /// Only entries referenced by some item are resolved and listed here;
    /// unreferenced entries are never checked.
    #[must_use]
    pub fn shared_multimedia(&self) -> &BTreeMap<String, Arc<Multimedia>> {
        &self.multimedia
    }
}

/// Document-level multimedia table, resolved on first reference.
struct SharedMedia {
    pending: BTreeMap<String, RawMultimedia>,
    resolved: BTreeMap<String, Arc<Multimedia>>,
}

impl SharedMedia {
    fn new(pending: BTreeMap<String, RawMultimedia>) -> Self {
        Self {
            pending,
            resolved: BTreeMap::new(),
        }
    }

    fn get(&mut self, item: usize, key: String) -> Result<Arc<Multimedia>, DocumentError> {
        if let Some(mm) = self.resolved.get(&key) {
            return Ok(Arc::clone(mm));
        }
        let Some(raw) = self.pending.remove(&key) else {
            return Err(DocumentError::UnresolvedReference { item, key });
        };
        let mm = Arc::new(resolve_multimedia(raw, &MediaLocation::Shared(key.clone()))?);
        self.resolved.insert(key, Arc::clone(&mm));
        Ok(mm)
    }
}

/// Empty titles fall back to defaults, same as absent ones.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn resolve_item(
    index: usize,
    raw: RawItem,
    shared: &mut SharedMedia,
) -> Result<Item, DocumentError> {
    let answer = resolve_answer(index, raw.answer)?;
    let multimedia = raw
        .multimedia
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(position, mm)| match mm {
            RawMultimediaRef::Reference { mmref } => shared.get(index, mmref),
            RawMultimediaRef::Inline(mm) => {
                let location = MediaLocation::Item {
                    item: index,
                    position,
                };
                resolve_multimedia(mm, &location).map(Arc::new)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Item {
        question: raw.question,
        answer,
        multimedia,
    })
}

fn resolve_answer(item: usize, raw: RawAnswer) -> Result<Answer, DocumentError> {
    let fields = match raw {
        RawAnswer::Literal(text) => return Ok(Answer::Literal(text)),
        RawAnswer::Fields(fields) => fields,
    };

    let present = fields.present_variants();
    if present.len() > 1 {
        return Err(DocumentError::ConflictingAnswer {
            item,
            fields: present,
        });
    }

    match fields {
        RawAnswerFields {
            regex: Some(pattern),
            ..
        } => Ok(Answer::RegexMatch(pattern)),
        RawAnswerFields {
            choice: Some(label),
            ..
        } => Ok(Answer::Choice(label)),
        RawAnswerFields { and: Some(all), .. } => Ok(Answer::Conjunction(all)),
        RawAnswerFields { or: Some(any), .. } => Ok(Answer::Disjunction(any)),
        RawAnswerFields {
            n: Some(n),
            of: Some(of),
            ..
        } => Ok(Answer::ThresholdOf {
            n: threshold(item, &n)?,
            of,
        }),
        RawAnswerFields { n: Some(_), .. } => Err(DocumentError::InvalidAnswer {
            item,
            message: "\"n\" requires an \"of\" list".to_owned(),
        }),
        RawAnswerFields { .. } => Err(DocumentError::UnrecognizedAnswerShape { item }),
    }
}

/// `2` and `2.0` are both integers to a schema validator; accept either.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn threshold(item: usize, n: &Value) -> Result<u64, DocumentError> {
    let count = n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(f))
            .map(|f| f as u64)
    });
    count.ok_or_else(|| DocumentError::InvalidAnswer {
        item,
        message: format!("\"n\" must be a non-negative integer, got {n}"),
    })
}

fn resolve_multimedia(
    raw: RawMultimedia,
    location: &MediaLocation,
) -> Result<Multimedia, DocumentError> {
    if raw.sources.is_empty() {
        return Err(DocumentError::EmptySources {
            location: location.clone(),
        });
    }

    let kind = MediaKind::parse(&raw.kind);
    if let MediaKind::Other(ref other) = kind {
        tracing::warn!(%location, kind = %other, "unsupported multimedia type will not be rendered");
    }

    let sources = raw
        .sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| resolve_source(source, location, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Multimedia { kind, sources })
}

fn resolve_source(
    raw: RawSource,
    location: &MediaLocation,
    index: usize,
) -> Result<MediaSource, DocumentError> {
    match raw {
        RawSource {
            uri: Some(uri),
            mimetype,
            ..
        } => Ok(MediaSource::Uri { uri, mimetype }),
        RawSource {
            uri: None,
            mimetype: Some(mimetype),
            data: Some(data),
        } => {
            check_inline_data(&data).map_err(|e| DocumentError::InvalidMediaData {
                location: location.clone(),
                index,
                message: e.to_string(),
            })?;
            Ok(MediaSource::Inline { mimetype, data })
        }
        RawSource { .. } => Err(DocumentError::InvalidSource {
            location: location.clone(),
            index,
        }),
    }
}

/// Payload text is kept as written; line-wrapped and unpadded base64 pass.
fn check_inline_data(data: &str) -> Result<(), base64::DecodeError> {
    let compact: Vec<u8> = data
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    INLINE_DATA.decode(compact).map(drop)
}

//! Serde shapes of the JSON input, before resolution.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub multimedia: BTreeMap<String, RawMultimedia>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    #[serde(default)]
    pub question: Option<String>,
    pub answer: RawAnswer,
    #[serde(default)]
    pub multimedia: Option<Vec<RawMultimediaRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawAnswer {
    Literal(String),
    Fields(RawAnswerFields),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawAnswerFields {
    pub regex: Option<String>,
    pub choice: Option<String>,
    pub and: Option<Vec<String>>,
    pub or: Option<Vec<String>>,
    /// Kept untyped so a bad count is reported against its item.
    pub n: Option<Value>,
    pub of: Option<Vec<String>>,
}

impl RawAnswerFields {
    /// Names of the variant-selecting fields that are set.
    pub fn present_variants(&self) -> Vec<&'static str> {
        [
            ("regex", self.regex.is_some()),
            ("choice", self.choice.is_some()),
            ("and", self.and.is_some()),
            ("or", self.or.is_some()),
            ("n", self.n.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

/// `mmref` presence wins over inline fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawMultimediaRef {
    Reference { mmref: String },
    Inline(RawMultimedia),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMultimedia {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub sources: Vec<RawSource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSource {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

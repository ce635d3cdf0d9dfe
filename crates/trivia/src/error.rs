//! CLI error types.

use std::path::PathBuf;

use trivia_config::ConfigError;
use trivia_document::DocumentError;
use trivia_renderer::TemplateError;
use trivia_schema::{SchemaError, ValidationReport};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Template(#[from] TemplateError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    InputJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    /// Document failed schema validation. Carries the validator's report.
    #[error("Input data not valid")]
    InvalidDocument(ValidationReport),

    /// Schema failed its meta-schema check.
    #[error("Schema not valid")]
    InvalidSchema(ValidationReport),

    #[error("{0}")]
    Usage(String),

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    /// Validation report attached to the error, if any.
    pub(crate) fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::InvalidDocument(report) | Self::InvalidSchema(report) => Some(report),
            _ => None,
        }
    }

    /// Attached report serialized as the validator produced it.
    pub(crate) fn report_json(&self) -> Option<Result<String, serde_json::Error>> {
        self.report().map(serde_json::to_string_pretty)
    }
}

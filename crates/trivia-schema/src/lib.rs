//! JSON Schema validation of trivia documents.
//!
//! Wraps the `jsonschema` crate behind [`SchemaValidator`], which produces a
//! [`ValidationReport`]: a validity flag plus every violation the validator
//! reported, in the validator's own order. The trivia schema ships embedded in
//! the crate and is used unless a different schema file is supplied.
//!
//! # Example
//!
//! ```
//! use trivia_schema::SchemaValidator;
//!
//! let validator = SchemaValidator::builtin().unwrap();
//! let document = serde_json::json!({
//!     "items": [{ "question": "2+2?", "answer": "4" }]
//! });
//! assert!(validator.validate(&document).valid);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

/// The trivia document schema bundled with the crate.
pub const BUILTIN_SCHEMA: &str = include_str!("../schema/trivia-schema.json");

/// Error returned when a schema cannot be loaded or compiled.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema file could not be read.
    #[error("Failed to read schema {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Schema file is not valid JSON.
    #[error("Schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Schema is JSON but not a usable JSON Schema.
    #[error("Schema failed to compile: {0}")]
    Compile(String),
}

/// A single structural violation reported by the validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value in the document.
    pub path: String,
    /// JSON pointer to the schema keyword that failed.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{path}: {}", self.message)
    }
}

/// Outcome of validating a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the document conforms to the schema.
    pub valid: bool,
    /// Every violation, in the order the validator produced them.
    pub errors: Vec<SchemaViolation>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<SchemaViolation>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Compiled schema ready to validate documents.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile a schema document.
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Compile the embedded trivia schema.
    pub fn builtin() -> Result<Self, SchemaError> {
        let schema: Value = serde_json::from_str(BUILTIN_SCHEMA)?;
        Self::new(&schema)
    }

    /// Read and compile a schema file.
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let schema = load_schema(path)?;
        Self::new(&schema)
    }

    /// Validate `document`, collecting every violation.
    #[must_use]
    pub fn validate(&self, document: &Value) -> ValidationReport {
        let errors: Vec<SchemaViolation> = self
            .validator
            .iter_errors(document)
            .map(|e| SchemaViolation {
                path: e.instance_path().to_string(),
                schema_path: e.schema_path().to_string(),
                message: e.to_string(),
            })
            .collect();
        tracing::debug!(violations = errors.len(), "validated document");
        ValidationReport::from_errors(errors)
    }
}

/// Read a schema file as JSON.
pub fn load_schema(path: &Path) -> Result<Value, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Parse the embedded trivia schema.
pub fn builtin_schema() -> Result<Value, SchemaError> {
    Ok(serde_json::from_str(BUILTIN_SCHEMA)?)
}

/// Check `schema` against its JSON Schema meta-schema.
#[must_use]
pub fn check_schema(schema: &Value) -> ValidationReport {
    match jsonschema::meta::validate(schema) {
        Ok(()) => ValidationReport::from_errors(Vec::new()),
        Err(e) => ValidationReport::from_errors(vec![SchemaViolation {
            path: e.instance_path().to_string(),
            schema_path: e.schema_path().to_string(),
            message: e.to_string(),
        }]),
    }
}

//! Loading steps shared by the commands.

use std::path::{Path, PathBuf};

use serde_json::Value;
use trivia_config::{CliSettings, Config};
use trivia_document::TriviaDocument;
use trivia_renderer::{RendererConfig, Template};
use trivia_schema::SchemaValidator;

use crate::error::CliError;

/// Options accepted by every command.
#[derive(clap::Args, Debug)]
pub(crate) struct SettingsArgs {
    /// Path to configuration file (default: auto-discover trivia.toml).
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// JSON Schema to validate against (default: built-in trivia schema).
    #[arg(long, global = true, env = "TRIVIA_SCHEMA")]
    pub(crate) schema: Option<PathBuf>,

    /// HTML template with $title, $description and $content placeholders.
    #[arg(long, global = true, env = "TRIVIA_TEMPLATE")]
    pub(crate) template: Option<PathBuf>,

    /// Escape HTML in document text instead of inserting it verbatim.
    #[arg(long, global = true)]
    pub(crate) escape_html: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl SettingsArgs {
    /// Load config with these flags applied on top.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            schema_path: self.schema.clone(),
            template_path: self.template.clone(),
            escape_html: self.escape_html.then_some(true),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Compile the configured schema, or the built-in one.
pub(crate) fn load_validator(config: &Config) -> Result<SchemaValidator, CliError> {
    let validator = match &config.schema_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using schema file");
            SchemaValidator::from_path(path)?
        }
        None => SchemaValidator::builtin()?,
    };
    Ok(validator)
}

/// Parse the configured template, or the built-in one.
pub(crate) fn load_template(config: &Config) -> Result<Template, CliError> {
    let template = match &config.template_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "using template file");
            Template::parse(&read_text(path)?)?
        }
        None => Template::builtin()?,
    };
    Ok(template)
}

/// Renderer settings from the `[render]` config section.
pub(crate) fn renderer_config(config: &Config) -> RendererConfig {
    RendererConfig {
        default_title: config.render.default_title.clone(),
        default_description: config.render.default_description.clone(),
        escape_html: config.render.escape_html,
    }
}

pub(crate) fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON file.
pub(crate) fn read_json(path: &Path) -> Result<Value, CliError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::InputJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate a document against the schema, then load it.
///
/// Nothing is loaded unless the schema check passes.
pub(crate) fn validate_and_load(
    validator: &SchemaValidator,
    value: Value,
) -> Result<TriviaDocument, CliError> {
    let report = validator.validate(&value);
    if !report.valid {
        tracing::info!(violations = report.errors.len(), "document rejected by schema");
        return Err(CliError::InvalidDocument(report));
    }
    Ok(TriviaDocument::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_invalid_document_carries_raw_report() {
        let validator = SchemaValidator::builtin().unwrap();
        let value = json!({ "items": [{ "question": "no answer" }] });
        let expected = validator.validate(&value);

        let err = validate_and_load(&validator, value).unwrap_err();

        assert_eq!(err.report(), Some(&expected));
        assert_eq!(err.to_string(), "Input data not valid");
    }

    #[test]
    fn test_schema_valid_but_dangling_reference() {
        let validator = SchemaValidator::builtin().unwrap();
        let value = json!({ "items": [{ "answer": "x", "multimedia": [{ "mmref": "k" }] }] });

        let err = validate_and_load(&validator, value).unwrap_err();

        assert!(matches!(
            err,
            CliError::Document(trivia_document::DocumentError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn test_read_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_json(&path).unwrap_err();

        assert!(matches!(err, CliError::InputJson { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_renderer_config_follows_render_section() {
        let mut config = Config::default();
        config.render.escape_html = true;
        let renderer = renderer_config(&config);
        assert!(renderer.escape_html);
        assert_eq!(renderer.default_title, "Trivia");
    }
}

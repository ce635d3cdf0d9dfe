//! Configuration management for the trivia renderer.
//!
//! Parses `trivia.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `schema.path`
//! - `template.path`
//! - `render.default_title`
//! - `render.default_description`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override schema file.
    pub schema_path: Option<PathBuf>,
    /// Override template file.
    pub template_path: Option<PathBuf>,
    /// Override HTML escaping of document text.
    pub escape_html: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "trivia.toml";

/// Title used when a document does not set one.
const DEFAULT_TITLE: &str = "Trivia";

/// Description used when a document does not set one.
const DEFAULT_DESCRIPTION: &str = "A round of trivia";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema section (path is a relative string from TOML).
    schema: SchemaConfigRaw,
    /// Template section (path is a relative string from TOML).
    template: TemplateConfigRaw,
    /// Rendering options.
    pub render: RenderConfig,

    /// Resolved schema file, `None` means the embedded schema.
    #[serde(skip)]
    pub schema_path: Option<PathBuf>,
    /// Resolved template file, `None` means the embedded template.
    #[serde(skip)]
    pub template_path: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SchemaConfigRaw {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TemplateConfigRaw {
    path: Option<String>,
}

/// Rendering configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Title substituted when the document has none.
    pub default_title: String,
    /// Description substituted when the document has none.
    pub default_description: String,
    /// Escape document text before splicing it into markup.
    pub escape_html: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_owned(),
            default_description: DEFAULT_DESCRIPTION.to_owned(),
            escape_html: false,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`template.path`").
        field: String,
        /// Error message (e.g., "${`TRIVIA_TEMPLATE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `trivia.toml` in current directory and parents.
    /// Without any config file the defaults apply (embedded schema and template).
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(schema_path) = &settings.schema_path {
            self.schema_path = Some(schema_path.clone());
        }
        if let Some(template_path) = &settings.template_path {
            self.template_path = Some(template_path.clone());
        }
        if let Some(escape_html) = settings.escape_html {
            self.render.escape_html = escape_html;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_from(&start)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.render.default_title, "render.default_title")?;
        require_non_empty(
            &self.render.default_description,
            "render.default_description",
        )?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.schema.path {
            self.schema.path = Some(expand::expand_env(path, "schema.path")?);
        }
        if let Some(ref path) = self.template.path {
            self.template.path = Some(expand::expand_env(path, "template.path")?);
        }
        self.render.default_title =
            expand::expand_env(&self.render.default_title, "render.default_title")?;
        self.render.default_description = expand::expand_env(
            &self.render.default_description,
            "render.default_description",
        )?;
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.schema_path = self.schema.path.as_deref().map(|p| config_dir.join(p));
        self.template_path = self.template.path.as_deref().map(|p| config_dir.join(p));
    }
}

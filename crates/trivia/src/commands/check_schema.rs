//! `trivia check-schema` command implementation.

use trivia_schema::{builtin_schema, check_schema, load_schema};

use crate::error::CliError;
use crate::output::Output;
use crate::pipeline::SettingsArgs;

/// Check the configured schema against its meta-schema.
pub(crate) fn execute(settings: &SettingsArgs) -> Result<(), CliError> {
    let output = Output::new();
    let config = settings.load_config()?;

    let schema = match &config.schema_path {
        Some(path) => {
            output.info(&format!("Schema: {}", path.display()));
            load_schema(path)?
        }
        None => {
            output.info("Schema: built-in");
            builtin_schema()?
        }
    };

    let report = check_schema(&schema);
    if !report.valid {
        return Err(CliError::InvalidSchema(report));
    }

    output.success("schema validates");
    Ok(())
}

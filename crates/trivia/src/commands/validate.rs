//! `trivia validate` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;
use crate::pipeline::{SettingsArgs, load_validator, read_json, validate_and_load};

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Trivia document (JSON).
    input: PathBuf,

    /// Print the validation report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl ValidateArgs {
    /// Check the document against the schema and load it without rendering.
    pub(crate) fn execute(&self, settings: &SettingsArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = settings.load_config()?;
        let validator = load_validator(&config)?;
        let value = read_json(&self.input)?;

        if self.json {
            let report = validator.validate(&value);
            let json = serde_json::to_string_pretty(&report)?;
            output.data(&json);
            if !report.valid {
                return Err(CliError::InvalidDocument(report));
            }
        }

        let document = validate_and_load(&validator, value)?;
        output.success(&format!(
            "data validates ({} item(s))",
            document.items().len()
        ));
        Ok(())
    }
}

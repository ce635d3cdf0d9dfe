//! Default command: render a trivia document to HTML.

use std::path::{Path, PathBuf};

use clap::Args;
use trivia_config::Config;
use trivia_renderer::TriviaRenderer;

use crate::artifact::write_artifact;
use crate::error::CliError;
use crate::output::Output;
use crate::pipeline::{
    SettingsArgs, load_template, load_validator, read_json, renderer_config, validate_and_load,
};

/// Arguments for rendering.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Trivia document (JSON).
    pub(crate) input: Option<PathBuf>,

    /// Where to write the HTML page.
    pub(crate) output: Option<PathBuf>,
}

/// Summary of a successful render.
#[derive(Debug)]
pub(crate) struct RenderSummary {
    pub(crate) items: usize,
}

impl RenderArgs {
    /// Input and output paths, when both were given.
    pub(crate) fn paths(&self) -> Option<(&Path, &Path)> {
        Some((self.input.as_deref()?, self.output.as_deref()?))
    }

    pub(crate) fn execute(&self, settings: &SettingsArgs) -> Result<(), CliError> {
        let output = Output::new();
        let Some((input, destination)) = self.paths() else {
            return Err(CliError::Usage(
                "expected <INPUT> <OUTPUT> or a subcommand".to_owned(),
            ));
        };
        let config = settings.load_config()?;

        output.info(&format!("Input: {}", input.display()));
        if destination.exists() {
            output.warning(&format!("Overwriting {}", destination.display()));
        }

        let summary = render_file(input, destination, &config)?;

        output.success(&format!(
            "Rendered {} item(s) to {}",
            summary.items,
            destination.display()
        ));
        Ok(())
    }
}

/// Validate, render and write one document.
///
/// Nothing is written unless every step before the write succeeds.
pub(crate) fn render_file(
    input: &Path,
    destination: &Path,
    config: &Config,
) -> Result<RenderSummary, CliError> {
    let validator = load_validator(config)?;
    let template = load_template(config)?;
    let document = validate_and_load(&validator, read_json(input)?)?;

    let renderer = TriviaRenderer::new(renderer_config(config));
    let page = renderer.render_page(&document, &template);
    write_artifact(destination, &page)?;

    Ok(RenderSummary {
        items: document.items().len(),
    })
}

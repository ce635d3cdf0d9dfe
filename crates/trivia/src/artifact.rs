//! Writing the rendered page.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CliError;

/// Write `contents` to `path`, replacing any existing file.
///
/// Data goes to a temporary file beside `path`, which is flushed and then
/// renamed over the destination. On failure the destination is untouched and
/// the temporary file is removed.
pub(crate) fn write_artifact(path: &Path, contents: &str) -> Result<(), CliError> {
    let to_error = |source: std::io::Error| CliError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(to_error)?;
    file.write_all(contents.as_bytes()).map_err(to_error)?;
    file.as_file().sync_all().map_err(to_error)?;
    file.persist(path).map_err(|e| to_error(e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

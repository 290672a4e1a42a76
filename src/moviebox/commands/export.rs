use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MovieboxError, Result};
use crate::model::{encode_export, MovieRecord};
use crate::store::MovieStore;
use std::fs;
use std::path::Path;

/// Default name for the combined export document.
pub const DEFAULT_EXPORT_FILE: &str = "all_movies.json";

/// Every stored record, newest first, without identities.
pub fn export_all<S: MovieStore>(store: &S) -> Result<Vec<MovieRecord>> {
    Ok(store
        .list_movies()?
        .into_iter()
        .map(|movie| movie.record)
        .collect())
}

/// The combined export document as text.
pub fn render<S: MovieStore>(store: &S) -> Result<String> {
    encode_export(&export_all(store)?)
}

/// Writes the combined export document to `dest`.
pub fn run<S: MovieStore>(store: &S, dest: &Path) -> Result<CmdResult> {
    let records = export_all(store)?;
    let content = encode_export(&records)?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(MovieboxError::Io)?;
    }
    fs::write(dest, content).map_err(MovieboxError::Io)?;

    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No movies to export."));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported {} movies to {}",
        records.len(),
        dest.display()
    )));
    Ok(result)
}

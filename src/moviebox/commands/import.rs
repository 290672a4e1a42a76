//! Bulk import of a JSON batch.
//!
//! The batch is validated as a whole first; a single bad element rejects
//! everything and nothing is stored. Valid candidates are then compared with
//! the catalog as it was when the import started, keyed on exact
//! `(title, director, year)`. Candidates already in the catalog are skipped.
//! The comparison set is not updated while the batch is stored, so a batch
//! carrying the same new movie twice stores it twice.
//!
//! Any `created_at` in the upload is dropped; the store stamps each movie as
//! it is saved.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MovieboxError, Result};
use crate::model::{MovieId, MovieRecord};
use crate::store::MovieStore;
use crate::validation::{check_file, validate_batch};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Outcome of an import: how many candidates were stored out of how many.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub accepted: usize,
    pub total: usize,
    pub imported: Vec<MovieId>,
}

impl ImportSummary {
    pub fn skipped(&self) -> usize {
        self.total - self.accepted
    }
}

/// Imports a JSON file. The file itself is only read, never kept.
pub fn run<S: MovieStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let batch = check_file(path)?;
    let summary = import_batch(store, &batch)?;

    let mut result = CmdResult::default();
    let mut affected = Vec::with_capacity(summary.imported.len());
    for id in &summary.imported {
        if let Some(movie) = store.get_movie(id)? {
            affected.push(movie);
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Imported {} of {} movies from {}",
        summary.accepted,
        summary.total,
        path.display()
    )));
    if summary.skipped() > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} already in the catalog",
            summary.skipped()
        )));
    }
    Ok(result.with_affected_movies(affected))
}

/// Validates, deduplicates and stores a parsed batch.
pub fn import_batch<S: MovieStore>(store: &mut S, batch: &Value) -> Result<ImportSummary> {
    validate_batch(batch)?;
    let mut candidates: Vec<MovieRecord> =
        serde_json::from_value(batch.clone()).map_err(MovieboxError::Serialization)?;
    // Creation time is assigned on arrival, whatever the upload says
    for candidate in &mut candidates {
        candidate.created_at = None;
    }

    let existing: HashSet<(String, String, i64)> = store
        .list_movies()?
        .into_iter()
        .map(|m| (m.record.title, m.record.director, m.record.year))
        .collect();

    let mut summary = ImportSummary {
        total: candidates.len(),
        ..Default::default()
    };

    for candidate in &candidates {
        let (title, director, year) = candidate.dedup_key();
        if existing.contains(&(title.to_string(), director.to_string(), year)) {
            debug!(title, director, year, "skipping movie already in the catalog");
            continue;
        }
        let id = store.save_movie(candidate)?;
        summary.imported.push(id);
        summary.accepted += 1;
    }

    Ok(summary)
}

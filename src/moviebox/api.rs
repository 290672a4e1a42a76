//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every moviebox operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: raw identity strings (bare stems or file names)
//!   become [`MovieId`]s
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic, does no terminal I/O and formats no output.
//!
//! ## Generic Over MovieStore
//!
//! `MovieboxApi<S: MovieStore>`:
//! - Production: `MovieboxApi<FileStore>`
//! - Testing: `MovieboxApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{MovieId, MovieRecord};
use crate::store::MovieStore;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The main API facade for moviebox operations.
pub struct MovieboxApi<S: MovieStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: MovieStore> MovieboxApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_movies(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_movies<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::view::run(&self.store, &ids)
    }

    pub fn add_movie(&mut self, record: MovieRecord) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn edit_movie(
        &mut self,
        id: &str,
        changes: commands::MovieChanges,
    ) -> Result<commands::CmdResult> {
        let id: MovieId = id.parse()?;
        commands::edit::run(&mut self.store, &id, changes)
    }

    pub fn delete_movies<I: AsRef<str>>(&mut self, ids: &[I]) -> Result<commands::CmdResult> {
        let ids = parse_ids(ids)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn import_batch(&mut self, batch: &Value) -> Result<ImportSummary> {
        commands::import::import_batch(&mut self.store, batch)
    }

    pub fn export_movies(&self, dest: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, dest)
    }

    pub fn export_all(&self) -> Result<Vec<MovieRecord>> {
        commands::export::export_all(&self.store)
    }

    pub fn export_document(&self) -> Result<String> {
        commands::export::render(&self.store)
    }

    pub fn document_files(&self) -> Result<commands::CmdResult> {
        commands::files::list(&self.store)
    }

    pub fn show_document(&self, id: &str) -> Result<commands::CmdResult> {
        let id: MovieId = id.parse()?;
        commands::files::show(&self.store, &id)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

/// Parses raw identity strings, keeping the first occurrence of duplicates.
fn parse_ids<I: AsRef<str>>(raw: &[I]) -> Result<Vec<MovieId>> {
    let mut ids: Vec<MovieId> = Vec::with_capacity(raw.len());
    for r in raw {
        let id: MovieId = r.as_ref().parse()?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::import::ImportSummary;
pub use crate::commands::{CmdMessage, CmdResult, DocumentFile, MessageLevel, MovieChanges};

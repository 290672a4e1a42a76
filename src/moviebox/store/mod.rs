//! # Storage Layer
//!
//! The [`MovieStore`] trait is the only way the rest of moviebox touches
//! persisted movies.
//!
//! ## Directory as Database
//!
//! Every movie lives in its own document file. There is no index and no cache:
//! listing rereads the whole directory, and a lookup is a listing filtered by
//! identity.
//!
//! ```text
//! <data dir>/
//! ├── movie-{uuid}.json   # one movie, as a single-element JSON array
//! └── ...
//! ```
//!
//! A document is `[ { "title": ..., ..., "created_at": ... } ]`, pretty
//! printed with two-space indent. The identity is the file stem and is never a
//! JSON key.
//!
//! ## Rules
//!
//! - **Listing order**: newest `created_at` first, by plain string comparison.
//!   A record without a timestamp compares as `""` and sinks to the bottom.
//!   Ties fall back to identity order.
//! - **Corrupt documents** are skipped (and logged) by listing and lookup.
//! - **Saving** always creates a new document under a fresh random identity and
//!   stamps `created_at` if the record has none. It never overwrites.
//! - **Deleting** an identity that is not there returns `false`.
//!
//! There is no update primitive. An edit is a delete followed by a save, see
//! [`crate::commands::edit`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store over a directory.
//! - [`memory::InMemoryStore`]: for testing command logic without the filesystem.

use crate::error::Result;
use crate::model::{MovieId, MovieRecord, StoredMovie};

pub mod fs;
pub mod memory;

/// Abstract interface for movie storage.
pub trait MovieStore {
    /// All stored movies, newest first.
    fn list_movies(&self) -> Result<Vec<StoredMovie>>;

    /// Look up one movie. A missing or unreadable document is `None`.
    fn get_movie(&self, id: &MovieId) -> Result<Option<StoredMovie>> {
        Ok(self.list_movies()?.into_iter().find(|m| &m.id == id))
    }

    /// Store a record as a new document and return its identity.
    fn save_movie(&mut self, record: &MovieRecord) -> Result<MovieId>;

    /// Remove a document. Returns whether it existed.
    fn delete_movie(&mut self, id: &MovieId) -> Result<bool>;

    /// The stored text of a document, exactly as persisted.
    fn raw_document(&self, id: &MovieId) -> Result<Option<String>>;

    /// Identities of every stored document in identity order, including
    /// documents that cannot be decoded.
    fn document_ids(&self) -> Result<Vec<MovieId>>;
}

/// Orders movies newest first, with the identity as tie-break.
pub fn sort_newest_first(movies: &mut [StoredMovie]) {
    movies.sort_by(|a, b| {
        b.record
            .created_at_key()
            .cmp(a.record.created_at_key())
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Returns the record to persist: a copy with `created_at` filled in.
pub(crate) fn stamped(record: &MovieRecord) -> MovieRecord {
    let mut record = record.clone();
    if record.created_at.is_none() {
        record.created_at = Some(crate::model::now_timestamp());
    }
    record
}

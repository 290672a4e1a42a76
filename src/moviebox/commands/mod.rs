//! # Command Layer
//!
//! This module contains the **core business logic** of moviebox. Each command
//! lives in its own submodule and implements plain Rust functions over a
//! [`MovieStore`](crate::store::MovieStore).
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal output**: no stdout or stderr, no colors, no exit codes
//! - **Argument parsing**: that's the CLI layer's job
//! - **User interaction**: no prompts; return data and let the UI decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_movies`: movies created or changed by the operation
//! - `listed_movies`: movies to display
//! - `documents`: raw stored documents (for `files` and `show`)
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore`; the file store has its own tests under
//! `tests/`.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a movie
//! - [`list`]: List all movies
//! - [`view`]: Look up movies by identity
//! - [`edit`]: Replace a movie (delete, then save)
//! - [`delete`]: Remove movies
//! - [`import`]: Bulk import a validated JSON batch
//! - [`export`]: Write every movie to one JSON document
//! - [`files`]: Inspect raw stored documents
//! - [`config`]: Manage configuration

use crate::config::MovieboxConfig;
use crate::model::{MovieId, StoredMovie};
use serde::Serialize;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod files;
pub mod import;
pub mod list;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A stored document as it sits on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFile {
    pub id: MovieId,
    pub size: usize,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<StoredMovie>,
    pub listed_movies: Vec<StoredMovie>,
    pub documents: Vec<DocumentFile>,
    pub config: Option<MovieboxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_movies(mut self, movies: Vec<StoredMovie>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<StoredMovie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_documents(mut self, documents: Vec<DocumentFile>) -> Self {
        self.documents = documents;
        self
    }
}

/// Field changes for an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i64>,
    pub genre: Option<String>,
    pub duration: Option<i64>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub cast: Option<String>,
    /// `Some(None)` clears the poster.
    pub image_url: Option<Option<String>>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.duration.is_none()
            && self.rating.is_none()
            && self.description.is_none()
            && self.cast.is_none()
            && self.image_url.is_none()
    }
}

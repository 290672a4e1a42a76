use super::{sort_newest_first, stamped, MovieStore};
use crate::error::{MovieboxError, Result};
use crate::model::{decode_document, encode_document, MovieId, MovieRecord, StoredMovie};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const DOC_EXT: &str = "json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document for `id`, or `None` when the identity could not
    /// name a file directly inside the root.
    fn document_path(&self, id: &MovieId) -> Option<PathBuf> {
        let raw = id.as_str();
        let addressable = !raw.is_empty()
            && !raw.starts_with('.')
            && !raw.contains(['/', '\\', '\0']);
        if addressable {
            Some(self.root.join(format!("{}.{}", raw, DOC_EXT)))
        } else {
            None
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MovieboxError::Io)?;
        }
        Ok(())
    }

    /// Reads and decodes one document. Unreadable or corrupt documents are
    /// logged and reported as absent.
    fn load(&self, id: &MovieId) -> Option<StoredMovie> {
        let path = self.document_path(id)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable movie document");
                return None;
            }
        };
        match decode_document(&text) {
            Ok(record) => Some(StoredMovie {
                id: id.clone(),
                record,
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping corrupt movie document");
                None
            }
        }
    }
}

/// Writes `content` to `tmp` and renames it over `target`. The temporary file
/// is removed again when either step fails.
fn write_atomically(tmp: &Path, target: &Path, content: &str) -> std::io::Result<()> {
    let written = fs::write(tmp, content).and_then(|()| fs::rename(tmp, target));
    if written.is_err() {
        let _ = fs::remove_file(tmp);
    }
    written
}

impl MovieStore for FileStore {
    fn list_movies(&self) -> Result<Vec<StoredMovie>> {
        let mut movies: Vec<StoredMovie> = self
            .document_ids()?
            .iter()
            .filter_map(|id| self.load(id))
            .collect();
        sort_newest_first(&mut movies);
        Ok(movies)
    }

    fn get_movie(&self, id: &MovieId) -> Result<Option<StoredMovie>> {
        Ok(self.load(id))
    }

    fn save_movie(&mut self, record: &MovieRecord) -> Result<MovieId> {
        self.ensure_dir()?;

        let record = stamped(record);
        let content = encode_document(&record)?;

        let (id, target_path) = loop {
            let id = MovieId::generate();
            if let Some(path) = self.document_path(&id) {
                if !path.exists() {
                    break (id, path);
                }
            }
        };

        let tmp_path = self.root.join(format!(".movie-{}.tmp", Uuid::new_v4()));
        write_atomically(&tmp_path, &target_path, &content).map_err(MovieboxError::Io)?;

        debug!(id = %id, title = %record.title, "saved movie document");
        Ok(id)
    }

    fn delete_movie(&mut self, id: &MovieId) -> Result<bool> {
        let Some(path) = self.document_path(id) else {
            return Ok(false);
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(id = %id, "deleted movie document");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(MovieboxError::Io(e)),
        }
    }

    fn raw_document(&self, id: &MovieId) -> Result<Option<String>> {
        let Some(path) = self.document_path(id) else {
            return Ok(None);
        };
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MovieboxError::Io(e)),
        }
    }

    fn document_ids(&self) -> Result<Vec<MovieId>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(MovieboxError::Io)?;
        for entry in entries {
            let entry = entry.map_err(MovieboxError::Io)?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(DOC_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if !stem.starts_with('.') {
                    ids.push(MovieId::new(stem));
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}

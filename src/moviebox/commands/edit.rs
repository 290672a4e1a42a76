//! Editing a movie.
//!
//! Documents are never rewritten in place: an edit deletes the old document
//! and saves the changed record as a new one, under a new identity. The
//! original `created_at` travels with the record. The two steps are not
//! atomic; if the process dies between them the movie is gone.

use crate::commands::{CmdMessage, CmdResult, MovieChanges};
use crate::error::{MovieboxError, Result};
use crate::model::{MovieId, MovieRecord};
use crate::store::MovieStore;
use crate::validation::validate_record;
use tracing::debug;

pub fn run<S: MovieStore>(store: &mut S, id: &MovieId, changes: MovieChanges) -> Result<CmdResult> {
    let existing = store
        .get_movie(id)?
        .ok_or_else(|| MovieboxError::MovieNotFound(id.clone()))?;

    let mut result = CmdResult::default();
    if changes.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for \"{}\"",
            existing.record.title
        )));
        return Ok(result.with_affected_movies(vec![existing]));
    }

    let updated = apply_changes(existing.record, changes);
    validate_record(&updated)?;

    // Gone since the lookup: saving now would bring a deleted movie back
    if !store.delete_movie(id)? {
        return Err(MovieboxError::MovieNotFound(id.clone()));
    }
    let new_id = store.save_movie(&updated)?;
    debug!(old = %id, new = %new_id, "replaced movie document");

    let stored = store
        .get_movie(&new_id)?
        .ok_or_else(|| MovieboxError::Store(format!("Movie {} missing right after save", new_id)))?;

    result.add_message(CmdMessage::success(format!(
        "Movie \"{}\" updated",
        stored.record.title
    )));
    Ok(result.with_affected_movies(vec![stored]))
}

fn apply_changes(mut record: MovieRecord, changes: MovieChanges) -> MovieRecord {
    if let Some(title) = changes.title {
        record.title = title;
    }
    if let Some(director) = changes.director {
        record.director = director;
    }
    if let Some(year) = changes.year {
        record.year = year;
    }
    if let Some(genre) = changes.genre {
        record.genre = genre;
    }
    if let Some(duration) = changes.duration {
        record.duration = duration;
    }
    if let Some(rating) = changes.rating {
        record.rating = rating;
    }
    if let Some(description) = changes.description {
        record.description = description;
    }
    if let Some(cast) = changes.cast {
        record.cast = cast;
    }
    if let Some(image_url) = changes.image_url {
        record.image_url = image_url;
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::validation::RecordError;

    const CREATED: &str = "2022-03-04T05:06:07.000000Z";

    fn seeded() -> (InMemoryStore, MovieId) {
        let mut store = InMemoryStore::new();
        let mut record = MovieRecord::new("Heat", "Mann", 1995, "Crime", 170, 8.3);
        record.created_at = Some(CREATED.to_string());
        let id = store.save_movie(&record).unwrap();
        (store, id)
    }

    #[test]
    fn replaces_document_and_keeps_creation_time() {
        let (mut store, id) = seeded();
        let changes = MovieChanges {
            rating: Some(9.0),
            cast: Some("Pacino, De Niro".to_string()),
            ..Default::default()
        };

        let result = run(&mut store, &id, changes).unwrap();

        let updated = &result.affected_movies[0];
        assert_ne!(updated.id, id);
        assert_eq!(updated.record.rating, 9.0);
        assert_eq!(updated.record.cast, "Pacino, De Niro");
        assert_eq!(updated.record.created_at.as_deref(), Some(CREATED));
        assert!(store.get_movie(&id).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clears_poster() {
        let mut store = InMemoryStore::new();
        let mut record = MovieRecord::new("Heat", "Mann", 1995, "Crime", 170, 8.3);
        record.image_url = Some("https://example.com/heat.jpg".to_string());
        let id = store.save_movie(&record).unwrap();

        let changes = MovieChanges {
            image_url: Some(None),
            ..Default::default()
        };
        let result = run(&mut store, &id, changes).unwrap();

        assert!(!result.affected_movies[0].record.has_poster());
    }

    #[test]
    fn missing_movie_is_an_error() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &MovieId::new("movie-gone"), MovieChanges::default()).unwrap_err();
        assert!(matches!(err, MovieboxError::MovieNotFound(_)));
    }

    #[test]
    fn invalid_changes_leave_original_in_place() {
        let (mut store, id) = seeded();
        let changes = MovieChanges {
            year: Some(1700),
            ..Default::default()
        };

        let err = run(&mut store, &id, changes).unwrap_err();

        assert!(matches!(
            err,
            MovieboxError::InvalidRecord(RecordError::YearOutOfRange)
        ));
        assert_eq!(store.get_movie(&id).unwrap().unwrap().record.year, 1995);
    }

    /// Loses each document just before it would be deleted, as when another
    /// process removes it first.
    struct RacingStore(InMemoryStore);

    impl MovieStore for RacingStore {
        fn list_movies(&self) -> Result<Vec<crate::model::StoredMovie>> {
            self.0.list_movies()
        }
        fn save_movie(&mut self, record: &MovieRecord) -> Result<MovieId> {
            self.0.save_movie(record)
        }
        fn delete_movie(&mut self, id: &MovieId) -> Result<bool> {
            self.0.delete_movie(id)?;
            Ok(false)
        }
        fn raw_document(&self, id: &MovieId) -> Result<Option<String>> {
            self.0.raw_document(id)
        }
        fn document_ids(&self) -> Result<Vec<MovieId>> {
            self.0.document_ids()
        }
    }

    #[test]
    fn movie_removed_mid_edit_is_not_resurrected() {
        let (inner, id) = seeded();
        let mut store = RacingStore(inner);
        let changes = MovieChanges {
            rating: Some(9.0),
            ..Default::default()
        };

        let err = run(&mut store, &id, changes).unwrap_err();

        assert!(matches!(err, MovieboxError::MovieNotFound(_)));
        assert!(store.0.is_empty());
    }

    #[test]
    fn empty_changes_do_not_touch_the_store() {
        let (mut store, id) = seeded();

        let result = run(&mut store, &id, MovieChanges::default()).unwrap();

        assert_eq!(result.affected_movies[0].id, id);
        assert!(store.get_movie(&id).unwrap().is_some());
    }
}

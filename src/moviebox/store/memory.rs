use super::{sort_newest_first, stamped, MovieStore};
use crate::error::Result;
use crate::model::{encode_document, MovieId, MovieRecord, StoredMovie};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    movies: HashMap<MovieId, MovieRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl MovieStore for InMemoryStore {
    fn list_movies(&self) -> Result<Vec<StoredMovie>> {
        let mut movies: Vec<StoredMovie> = self
            .movies
            .iter()
            .map(|(id, record)| StoredMovie {
                id: id.clone(),
                record: record.clone(),
            })
            .collect();
        sort_newest_first(&mut movies);
        Ok(movies)
    }

    fn save_movie(&mut self, record: &MovieRecord) -> Result<MovieId> {
        let mut id = MovieId::generate();
        while self.movies.contains_key(&id) {
            id = MovieId::generate();
        }
        self.movies.insert(id.clone(), stamped(record));
        Ok(id)
    }

    fn delete_movie(&mut self, id: &MovieId) -> Result<bool> {
        Ok(self.movies.remove(id).is_some())
    }

    fn raw_document(&self, id: &MovieId) -> Result<Option<String>> {
        self.movies.get(id).map(encode_document).transpose()
    }

    fn document_ids(&self) -> Result<Vec<MovieId>> {
        let mut ids: Vec<MovieId> = self.movies.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a movie with an explicit creation timestamp.
        pub fn with_movie(mut self, title: &str, director: &str, year: i64, created_at: &str) -> Self {
            let mut record = MovieRecord::new(title, director, year, "Drama", 100, 7.0);
            record.created_at = Some(created_at.to_string());
            self.store.save_movie(&record).unwrap();
            self
        }

        /// Adds a movie that has no creation timestamp on record.
        pub fn with_undated_movie(mut self, title: &str) -> Self {
            let record = MovieRecord::new(title, "Unknown", 2000, "Drama", 100, 7.0);
            let id = MovieId::generate();
            self.store.movies.insert(id, record);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn save_then_get_round_trips_with_timestamp() {
        let mut store = InMemoryStore::new();
        let record = MovieRecord::new("Alien", "Scott", 1979, "Horror", 117, 8.5);
        let id = store.save_movie(&record).unwrap();

        let stored = store.get_movie(&id).unwrap().unwrap();
        assert!(stored.record.created_at.is_some());
        let mut expected = record.clone();
        expected.created_at = stored.record.created_at.clone();
        assert_eq!(stored.record, expected);
    }

    #[test]
    fn delete_reports_existence() {
        let mut store = InMemoryStore::new();
        let id = store
            .save_movie(&MovieRecord::new("Alien", "Scott", 1979, "Horror", 117, 8.5))
            .unwrap();
        assert!(store.delete_movie(&id).unwrap());
        assert!(!store.delete_movie(&id).unwrap());
        assert!(store.get_movie(&id).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn lists_newest_first_and_undated_last() {
        let fixture = StoreFixture::new()
            .with_undated_movie("Undated")
            .with_movie("Old", "A", 1990, "2020-01-01T00:00:00.000000Z")
            .with_movie("New", "B", 2020, "2024-01-01T00:00:00.000000Z");
        let titles: Vec<_> = fixture
            .store
            .list_movies()
            .unwrap()
            .into_iter()
            .map(|m| m.record.title)
            .collect();
        assert_eq!(titles, vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn raw_document_matches_file_format() {
        let mut store = InMemoryStore::new();
        let id = store
            .save_movie(&MovieRecord::new("Alien", "Scott", 1979, "Horror", 117, 8.5))
            .unwrap();
        let raw = store.raw_document(&id).unwrap().unwrap();
        assert!(raw.starts_with("[\n  {\n    \"title\": \"Alien\""));
        assert!(store.raw_document(&MovieId::new("nope")).unwrap().is_none());
    }
}

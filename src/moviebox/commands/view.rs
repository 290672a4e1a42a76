use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MovieId;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &S, ids: &[MovieId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        match store.get_movie(id)? {
            Some(movie) => result.listed_movies.push(movie),
            None => result.add_message(CmdMessage::warning(format!("No movie with id {}", id))),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieRecord;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_known_and_warns_on_unknown() {
        let mut store = InMemoryStore::new();
        let id = store
            .save_movie(&MovieRecord::new("Heat", "Mann", 1995, "Crime", 170, 8.3))
            .unwrap();

        let result = run(&store, &[id.clone(), MovieId::new("movie-missing")]).unwrap();

        assert_eq!(result.listed_movies.len(), 1);
        assert_eq!(result.listed_movies[0].id, id);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("movie-missing"));
    }
}

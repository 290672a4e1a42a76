use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MovieId;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &mut S, ids: &[MovieId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let existing = store.get_movie(id)?;
        if store.delete_movie(id)? {
            let label = existing
                .map(|m| format!("\"{}\"", m.record.title))
                .unwrap_or_else(|| id.to_string());
            result.add_message(CmdMessage::success(format!("Movie {} deleted", label)));
        } else {
            result.add_message(CmdMessage::warning(format!("No movie with id {}", id)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MovieRecord;
    use crate::store::memory::InMemoryStore;
    use crate::commands::MessageLevel;

    #[test]
    fn deletes_and_reports_title() {
        let mut store = InMemoryStore::new();
        let id = store
            .save_movie(&MovieRecord::new("Heat", "Mann", 1995, "Crime", 170, 8.3))
            .unwrap();

        let result = run(&mut store, &[id.clone()]).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Movie \"Heat\" deleted");
        assert!(store.get_movie(&id).unwrap().is_none());
    }

    #[test]
    fn unknown_id_is_a_warning_not_an_error() {
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &[MovieId::new("movie-never-issued")]).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn deleting_twice_is_harmless() {
        let mut store = InMemoryStore::new();
        let id = store
            .save_movie(&MovieRecord::new("Heat", "Mann", 1995, "Crime", 170, 8.3))
            .unwrap();

        run(&mut store, &[id.clone()]).unwrap();
        let second = run(&mut store, &[id]).unwrap();

        assert_eq!(second.messages[0].level, MessageLevel::Warning);
    }
}

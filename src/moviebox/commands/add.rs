use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MovieboxError, Result};
use crate::model::MovieRecord;
use crate::store::MovieStore;
use crate::validation::validate_record;

pub fn run<S: MovieStore>(store: &mut S, mut record: MovieRecord) -> Result<CmdResult> {
    validate_record(&record)?;

    // The creation time is assigned by the store, never taken from input
    record.created_at = None;
    let id = store.save_movie(&record)?;
    let stored = store
        .get_movie(&id)?
        .ok_or_else(|| MovieboxError::Store(format!("Movie {} missing right after save", id)))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie \"{}\" added",
        stored.record.title
    )));
    Ok(result.with_affected_movies(vec![stored]))
}

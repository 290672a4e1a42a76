use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let movies = store.list_movies()?;
    Ok(CmdResult::default().with_listed_movies(movies))
}

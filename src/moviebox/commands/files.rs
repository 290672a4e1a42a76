//! Raw access to stored documents, for inspecting what is actually on disk.

use crate::commands::{CmdMessage, CmdResult, DocumentFile};
use crate::error::Result;
use crate::model::{decode_document, MovieId};
use crate::store::MovieStore;

/// Every stored document with its size and content, in identity order.
///
/// Documents that are not valid movies are listed too, each with a warning.
/// One that cannot be read at all gets a warning instead of an entry.
pub fn list<S: MovieStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut documents = Vec::new();
    for id in store.document_ids()? {
        match store.raw_document(&id) {
            Ok(Some(content)) => {
                if let Err(e) = decode_document(&content) {
                    result.add_message(CmdMessage::warning(format!(
                        "{}.json is not a valid movie document: {}",
                        id, e
                    )));
                }
                documents.push(DocumentFile {
                    id,
                    size: content.len(),
                    content,
                });
            }
            Ok(None) => {}
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "error reading {}.json: {}",
                id, e
            ))),
        }
    }
    Ok(result.with_documents(documents))
}

/// The raw text of one document.
pub fn show<S: MovieStore>(store: &S, id: &MovieId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.raw_document(id)? {
        Some(content) => result.documents.push(DocumentFile {
            id: id.clone(),
            size: content.len(),
            content,
        }),
        None => result.add_message(CmdMessage::warning(format!("No document named {}", id))),
    }
    Ok(result)
}

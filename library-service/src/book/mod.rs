//! Book management module.

/// Book creation command handler.
pub mod create_book_command;

/// Book query manager for data retrieval.
pub mod query_manager;

/// Book update command handler.
pub mod update_book_command;

use itertools::Itertools;
use library_api::model::{
    author::AuthorId,
    error::{CommonError, RequestError, RequestResult},
};

/// Validates the name and author list shared by book create and update.
fn validate_book_input<'a>(name: &'a str, author_ids: &[AuthorId]) -> RequestResult<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RequestError::field("name", CommonError::RequiredFieldMissing));
    }
    if author_ids.iter().any(|id| id.as_str().trim().is_empty()) {
        return Err(RequestError::field("author_ids", CommonError::InvalidId));
    }
    if !author_ids.iter().all_unique() {
        return Err(RequestError::field("author_ids", CommonError::DuplicateId));
    }
    Ok(name)
}

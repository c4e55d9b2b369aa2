use library_api::model::{
    author::AuthorId,
    book::{Book, BookId},
};
use tracing::info;

use super::validate_book_input;
use crate::{error::AppResult, repository::BookRepositoryArc};

#[derive(Debug, Clone)]
pub struct UpdateBookCommand {
    book_repository: BookRepositoryArc,
}

#[derive(Debug)]
pub struct UpdateBookCommandInput<'a> {
    pub id: &'a BookId,
    pub name: &'a str,
    pub author_ids: &'a [AuthorId],
}

#[derive(Debug)]
pub struct UpdateBookCommandOutput {
    pub book: Book,
}

impl UpdateBookCommand {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// Replaces the name and authors of a book.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid, the book does not exist or
    /// any previous or new author does not exist.
    #[tracing::instrument]
    pub fn execute(&self, input: UpdateBookCommandInput<'_>) -> AppResult<UpdateBookCommandOutput> {
        let name = validate_book_input(input.name, input.author_ids)?;

        self.book_repository
            .update_book(input.id, name, input.author_ids)?;

        info!(book_id = %input.id, "Updated book");

        Ok(UpdateBookCommandOutput {
            book: Book::new(input.id.clone(), name, input.author_ids.to_vec()),
        })
    }
}

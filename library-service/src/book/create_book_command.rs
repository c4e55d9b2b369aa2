use library_api::model::{
    author::AuthorId,
    book::{Book, BookId},
};
use tracing::info;

use super::validate_book_input;
use crate::{error::AppResult, repository::BookRepositoryArc};

#[derive(Debug, Clone)]
pub struct CreateBookCommand {
    book_repository: BookRepositoryArc,
}

#[derive(Debug)]
pub struct CreateBookCommandInput<'a> {
    pub name: &'a str,
    pub author_ids: &'a [AuthorId],
}

#[derive(Debug)]
pub struct CreateBookCommandOutput {
    pub book: Book,
}

impl CreateBookCommand {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        Self { book_repository }
    }

    /// Executes the book creation command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid or any author does not exist.
    #[tracing::instrument]
    pub fn execute(&self, input: CreateBookCommandInput<'_>) -> AppResult<CreateBookCommandOutput> {
        let name = validate_book_input(input.name, input.author_ids)?;

        let book = self.book_repository.create_book(Book::new(
            BookId::generate(),
            name,
            input.author_ids.to_vec(),
        ))?;

        info!(
            book_id = %book.id,
            author_count = book.author_ids.len(),
            "Successfully created book"
        );

        Ok(CreateBookCommandOutput { book })
    }
}

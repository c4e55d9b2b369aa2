use std::sync::Arc;

use library_api::model::{
    author::{Author, AuthorId},
    book::{Book, BookId},
};

use crate::{
    author::{
        create_author_command::{CreateAuthorCommand, CreateAuthorCommandInput},
        query_manager::AuthorQueryManager,
        update_author_command::{UpdateAuthorCommand, UpdateAuthorCommandInput},
    },
    book::{
        create_book_command::{CreateBookCommand, CreateBookCommandInput},
        query_manager::BookQueryManager,
        update_book_command::{UpdateBookCommand, UpdateBookCommandInput},
    },
    error::AppResult,
    repository::{AuthorRepository, AuthorRepositoryArc, BookRepository, BookRepositoryArc},
};

/// Use-case layer of the library.
///
/// Front-ends call into this type; it never locks anything itself and each
/// call maps onto one atomic repository operation.
#[derive(Debug, Clone)]
pub struct LibraryService {
    author_query_manager: AuthorQueryManager,
    create_author_command: CreateAuthorCommand,
    update_author_command: UpdateAuthorCommand,
    book_query_manager: BookQueryManager,
    create_book_command: CreateBookCommand,
    update_book_command: UpdateBookCommand,
}

impl LibraryService {
    /// Creates a service whose commands and queries all share `repository`.
    ///
    /// Book operations validate author references against the same store
    /// that registers authors, so both sides must be one instance.
    pub fn new<R>(repository: Arc<R>) -> Self
    where
        R: AuthorRepository + BookRepository + Send + Sync + 'static,
    {
        let author_repository: AuthorRepositoryArc = repository.clone();
        let book_repository: BookRepositoryArc = repository;
        Self {
            author_query_manager: AuthorQueryManager::new(Arc::clone(&author_repository)),
            create_author_command: CreateAuthorCommand::new(Arc::clone(&author_repository)),
            update_author_command: UpdateAuthorCommand::new(author_repository),
            book_query_manager: BookQueryManager::new(Arc::clone(&book_repository)),
            create_book_command: CreateBookCommand::new(Arc::clone(&book_repository)),
            update_book_command: UpdateBookCommand::new(book_repository),
        }
    }

    pub fn register_author(&self, name: &str) -> AppResult<Author> {
        Ok(self
            .create_author_command
            .execute(CreateAuthorCommandInput { name })?
            .author)
    }

    pub fn get_author_info(&self, id: &AuthorId) -> AppResult<Author> {
        self.author_query_manager.query(id)
    }

    pub fn change_author_info(&self, id: &AuthorId, name: &str) -> AppResult<Author> {
        Ok(self
            .update_author_command
            .execute(UpdateAuthorCommandInput { id, name })?
            .author)
    }

    pub fn get_author_books(&self, id: &AuthorId) -> AppResult<Vec<Book>> {
        self.author_query_manager.query_books(id)
    }

    pub fn add_book(&self, name: &str, author_ids: &[AuthorId]) -> AppResult<Book> {
        Ok(self
            .create_book_command
            .execute(CreateBookCommandInput { name, author_ids })?
            .book)
    }

    pub fn get_book_info(&self, id: &BookId) -> AppResult<Book> {
        self.book_query_manager.query(id)
    }

    pub fn update_book(&self, id: &BookId, name: &str, author_ids: &[AuthorId]) -> AppResult<Book> {
        Ok(self
            .update_book_command
            .execute(UpdateBookCommandInput {
                id,
                name,
                author_ids,
            })?
            .book)
    }
}

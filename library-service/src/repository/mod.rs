use std::{fmt::Debug, sync::Arc};

use library_api::model::{
    author::{Author, AuthorId},
    book::{Book, BookId},
    error::LibraryResult,
};

/// In-memory repository implementation.
pub mod memory;

/// Repository trait for author data operations.
///
/// Every call is atomic from the caller's point of view. Returned values are
/// copies, never views into the repository state.
pub trait AuthorRepository: Debug {
    /// Stores a new author.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::AlreadyExists` if the id is taken.
    fn create_author(&self, author: Author) -> LibraryResult<Author>;

    /// Selects an author by ID.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::NotFound` if the author does not exist.
    fn get_author(&self, id: &AuthorId) -> LibraryResult<Author>;

    /// Replaces the name of an existing author.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::NotFound` if the author does not exist.
    fn change_author_info(&self, id: &AuthorId, name: &str) -> LibraryResult<()>;

    /// Selects every book currently attributed to an author, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `AuthorError::NotFound` if the author does not exist.
    fn get_author_books(&self, id: &AuthorId) -> LibraryResult<Vec<Book>>;
}

/// Repository trait for book data operations.
pub trait BookRepository: Debug {
    /// Stores a new book and attributes it to its authors.
    ///
    /// # Errors
    ///
    /// Returns `BookError::AlreadyExists` if the id is taken, or
    /// `AuthorError::NotFound` if any referenced author does not exist.
    /// Nothing is stored on error.
    fn create_book(&self, book: Book) -> LibraryResult<Book>;

    /// Selects a book by ID.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the book does not exist.
    fn get_book(&self, id: &BookId) -> LibraryResult<Book>;

    /// Fully replaces the name and author list of an existing book.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if the book does not exist, or
    /// `AuthorError::NotFound` if any previous or new author does not exist.
    /// Nothing is changed on error.
    fn update_book(&self, id: &BookId, name: &str, author_ids: &[AuthorId]) -> LibraryResult<()>;
}

pub type AuthorRepositoryArc = Arc<dyn AuthorRepository + Send + Sync>;

pub type BookRepositoryArc = Arc<dyn BookRepository + Send + Sync>;

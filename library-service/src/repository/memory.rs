use std::collections::{HashMap, HashSet};

use library_api::model::{
    author::{Author, AuthorId},
    book::{Book, BookId},
    error::{LibraryError, LibraryResult},
};
use parking_lot::RwLock;

use crate::repository::{AuthorRepository, BookRepository};

/// In-memory catalog of authors, books and the author to books index.
///
/// Each structure has its own lock. Locks are always acquired in the order
/// authors, books, index. Compound operations validate everything before
/// mutating and hold every lock they touch until all structures agree again.
#[derive(Debug)]
pub struct MemoryLibraryRepository {
    authors: RwLock<HashMap<AuthorId, Author>>,
    books: RwLock<HashMap<BookId, Book>>,
    author_books: RwLock<HashMap<AuthorId, HashSet<BookId>>>,
}

impl Default for MemoryLibraryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLibraryRepository {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(HashMap::new()),
            books: RwLock::new(HashMap::new()),
            author_books: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a new memory repository with initial data.
    ///
    /// Authors are inserted first, then books, through the same checks as
    /// regular creation.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or books referencing unknown authors.
    pub fn with_data(authors: Vec<Author>, books: Vec<Book>) -> LibraryResult<Self> {
        let repository = Self::new();
        for author in authors {
            repository.create_author(author)?;
        }
        for book in books {
            repository.create_book(book)?;
        }
        Ok(repository)
    }

    pub fn author_count(&self) -> usize {
        self.authors.read().len()
    }

    pub fn book_count(&self) -> usize {
        self.books.read().len()
    }

    fn check_authors_exist(
        authors: &HashMap<AuthorId, Author>,
        author_ids: &[AuthorId],
    ) -> LibraryResult<()> {
        match author_ids.iter().find(|id| !authors.contains_key(*id)) {
            Some(missing) => Err(LibraryError::author_not_found(missing)),
            None => Ok(()),
        }
    }
}

impl AuthorRepository for MemoryLibraryRepository {
    fn create_author(&self, author: Author) -> LibraryResult<Author> {
        let mut authors = self.authors.write();
        let mut author_books = self.author_books.write();

        if authors.contains_key(&author.id) {
            return Err(LibraryError::author_already_exists(&author.id));
        }

        author_books.insert(author.id.clone(), HashSet::new());
        authors.insert(author.id.clone(), author.clone());
        Ok(author)
    }

    fn get_author(&self, id: &AuthorId) -> LibraryResult<Author> {
        self.authors
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| LibraryError::author_not_found(id))
    }

    fn change_author_info(&self, id: &AuthorId, name: &str) -> LibraryResult<()> {
        let mut authors = self.authors.write();
        let author = authors
            .get_mut(id)
            .ok_or_else(|| LibraryError::author_not_found(id))?;
        author.name = name.to_string();
        Ok(())
    }

    fn get_author_books(&self, id: &AuthorId) -> LibraryResult<Vec<Book>> {
        let authors = self.authors.read();
        let books = self.books.read();
        let author_books = self.author_books.read();

        if !authors.contains_key(id) {
            return Err(LibraryError::author_not_found(id));
        }
        let Some(book_ids) = author_books.get(id) else {
            return Ok(Vec::new());
        };

        Ok(book_ids
            .iter()
            .filter_map(|book_id| books.get(book_id).cloned())
            .collect())
    }
}

impl BookRepository for MemoryLibraryRepository {
    fn create_book(&self, book: Book) -> LibraryResult<Book> {
        let authors = self.authors.read();
        let mut books = self.books.write();
        let mut author_books = self.author_books.write();

        if books.contains_key(&book.id) {
            return Err(LibraryError::book_already_exists(&book.id));
        }
        Self::check_authors_exist(&authors, &book.author_ids)?;

        for author_id in &book.author_ids {
            author_books
                .entry(author_id.clone())
                .or_default()
                .insert(book.id.clone());
        }
        books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    fn get_book(&self, id: &BookId) -> LibraryResult<Book> {
        self.books
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| LibraryError::book_not_found(id))
    }

    fn update_book(&self, id: &BookId, name: &str, author_ids: &[AuthorId]) -> LibraryResult<()> {
        let authors = self.authors.read();
        let mut books = self.books.write();
        let mut author_books = self.author_books.write();

        let book = books
            .get_mut(id)
            .ok_or_else(|| LibraryError::book_not_found(id))?;
        Self::check_authors_exist(&authors, &book.author_ids)?;
        Self::check_authors_exist(&authors, author_ids)?;

        for author_id in &book.author_ids {
            if let Some(book_ids) = author_books.get_mut(author_id) {
                book_ids.remove(id);
            }
        }
        for author_id in author_ids {
            author_books
                .entry(author_id.clone())
                .or_default()
                .insert(id.clone());
        }

        *book = Book {
            id: id.clone(),
            name: name.to_string(),
            author_ids: author_ids.to_vec(),
        };
        Ok(())
    }
}

use library_api::model::book::{Book, BookId};

use crate::{error::AppResult, repository::BookRepositoryArc};

#[derive(Debug, Clone)]
pub struct BookQueryManager {
    book_repository: BookRepositoryArc,
}

impl BookQueryManager {
    pub fn new(book_repository: BookRepositoryArc) -> Self {
        BookQueryManager { book_repository }
    }

    pub fn query(&self, id: &BookId) -> AppResult<Book> {
        Ok(self.book_repository.get_book(id)?)
    }
}

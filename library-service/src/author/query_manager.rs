use itertools::Itertools;
use library_api::model::{
    author::{Author, AuthorId},
    book::Book,
};

use crate::{error::AppResult, repository::AuthorRepositoryArc};

#[derive(Debug, Clone)]
pub struct AuthorQueryManager {
    author_repository: AuthorRepositoryArc,
}

impl AuthorQueryManager {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        AuthorQueryManager { author_repository }
    }

    pub fn query(&self, id: &AuthorId) -> AppResult<Author> {
        Ok(self.author_repository.get_author(id)?)
    }

    /// Queries the books of an author, ordered by book ID.
    pub fn query_books(&self, id: &AuthorId) -> AppResult<Vec<Book>> {
        Ok(self
            .author_repository
            .get_author_books(id)?
            .into_iter()
            .sorted_unstable_by(|a, b| a.id.cmp(&b.id))
            .collect())
    }
}

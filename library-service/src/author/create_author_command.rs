use library_api::model::{
    author::{Author, AuthorId},
    error::{CommonError, RequestError},
};
use tracing::info;

use crate::{error::AppResult, repository::AuthorRepositoryArc};

/// Command for creating new authors.
///
/// Handles the business logic for author creation including ID generation
/// and validation.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

/// Input data for creating an author.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandInput<'a> {
    /// Author name
    pub name: &'a str,
}

/// Output data from author creation.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommandOutput {
    /// The created author
    pub author: Author,
}

impl CreateAuthorCommand {
    /// Creates a new `CreateAuthorCommand`.
    ///
    /// # Arguments
    ///
    /// * `author_repository` - Repository for storing author data
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        Self { author_repository }
    }

    /// Executes the author creation command.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the author cannot be stored.
    #[tracing::instrument]
    pub fn execute(
        &self,
        input: CreateAuthorCommandInput<'_>,
    ) -> AppResult<CreateAuthorCommandOutput> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RequestError::field("name", CommonError::RequiredFieldMissing).into());
        }

        let author = self
            .author_repository
            .create_author(Author::new(AuthorId::generate(), name))?;

        info!(author_id = %author.id, "Successfully created author");

        Ok(CreateAuthorCommandOutput { author })
    }
}

use library_api::model::{
    author::{Author, AuthorId},
    error::{CommonError, RequestError},
};
use tracing::info;

use crate::{error::AppResult, repository::AuthorRepositoryArc};

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommand {
    author_repository: AuthorRepositoryArc,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandInput<'a> {
    pub id: &'a AuthorId,
    pub name: &'a str,
}

#[derive(Debug, Clone)]
pub struct UpdateAuthorCommandOutput {
    pub author: Author,
}

impl UpdateAuthorCommand {
    pub fn new(author_repository: AuthorRepositoryArc) -> Self {
        UpdateAuthorCommand { author_repository }
    }

    #[tracing::instrument]
    pub fn execute(
        &self,
        input: UpdateAuthorCommandInput<'_>,
    ) -> AppResult<UpdateAuthorCommandOutput> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RequestError::field("name", CommonError::InvalidDisplayName).into());
        }

        self.author_repository.change_author_info(input.id, name)?;

        info!(author_id = %input.id, "Changed author info");

        Ok(UpdateAuthorCommandOutput {
            author: Author::new(input.id.clone(), name),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        error::AppError,
        repository::{AuthorRepository, memory::MemoryLibraryRepository},
    };

    use super::*;

    #[test]
    fn it_works() {
        let repository = Arc::new(MemoryLibraryRepository::new());
        let id = AuthorId::new("a1");
        repository.create_author(Author::new(id.clone(), "Ada")).unwrap();
        let command = UpdateAuthorCommand::new(repository.clone());

        let output = command
            .execute(UpdateAuthorCommandInput {
                id: &id,
                name: "Ada Lovelace",
            })
            .unwrap();
        assert_eq!(output.author, Author::new(id.clone(), "Ada Lovelace"));
        assert_eq!(repository.get_author(&id).unwrap().name, "Ada Lovelace");

        assert!(matches!(
            command.execute(UpdateAuthorCommandInput { id: &id, name: "" }),
            Err(AppError::Request(_)),
        ));
        assert!(matches!(
            command.execute(UpdateAuthorCommandInput {
                id: &AuthorId::new("a2"),
                name: "Grace",
            }),
            Err(AppError::Library(err)) if err.is_not_found(),
        ));
    }
}

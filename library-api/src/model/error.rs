use std::fmt::Display;

use thiserror::Error;

use crate::model::{author::AuthorId, book::BookId};

/// Errors returned by the catalog store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error(transparent)]
    Author(#[from] AuthorError),
    #[error(transparent)]
    Book(#[from] BookError),
}

pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorError {
    #[error("author `{0}` not found")]
    NotFound(AuthorId),
    #[error("author `{0}` already exists")]
    AlreadyExists(AuthorId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("book `{0}` not found")]
    NotFound(BookId),
    #[error("book `{0}` already exists")]
    AlreadyExists(BookId),
}

impl LibraryError {
    pub fn author_not_found(id: &AuthorId) -> Self {
        AuthorError::NotFound(id.clone()).into()
    }

    pub fn author_already_exists(id: &AuthorId) -> Self {
        AuthorError::AlreadyExists(id.clone()).into()
    }

    pub fn book_not_found(id: &BookId) -> Self {
        BookError::NotFound(id.clone()).into()
    }

    pub fn book_already_exists(id: &BookId) -> Self {
        BookError::AlreadyExists(id.clone()).into()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Author(AuthorError::NotFound(_)) | Self::Book(BookError::NotFound(_))
        )
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Self::Author(AuthorError::AlreadyExists(_)) | Self::Book(BookError::AlreadyExists(_))
        )
    }
}

/// Validation failures of a single request value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("no value provided for required field")]
    RequiredFieldMissing,
    #[error("invalid ID format")]
    InvalidId,
    #[error("duplicate ID")]
    DuplicateId,
    #[error("invalid display name format")]
    InvalidDisplayName,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid field `{field}`: {error}")]
    Field { field: String, error: CommonError },
}

pub type RequestResult<T> = Result<T, RequestError>;

impl RequestError {
    #[must_use]
    pub fn field<F: Display>(field: F, error: CommonError) -> Self {
        Self::Field {
            field: field.to_string(),
            error,
        }
    }
}

use library_api::model::error::{LibraryError, RequestError};
use thiserror::Error;

/// Application error types.
///
/// Represents all possible errors that can occur in the library service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Internal application error.
    ///
    /// Represents unexpected internal errors that occur during service operation.
    #[error("internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// Request validation error.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// Catalog store error.
    #[error(transparent)]
    Library(#[from] LibraryError),
}

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

macro_rules! impl_internal_errors {
    ( $( $type:ty ),* $(,)? ) => {
        $(
        impl From<$type> for AppError {
            fn from(err: $type) -> Self {
                AppError::Internal(Box::new(err))
            }
        }
        )*
    };
}
impl_internal_errors!(config::ConfigError, std::io::Error);

impl AppError {
    /// Returns the catalog store error, if this is one.
    pub fn as_library(&self) -> Option<&LibraryError> {
        match self {
            Self::Library(err) => Some(err),
            _ => None,
        }
    }
}

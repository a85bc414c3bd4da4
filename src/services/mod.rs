pub mod user;

use thiserror::Error;

use crate::domain::types::UserId;
use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer.
///
/// A missing user is lifted out so callers can branch on it; every other
/// repository failure is carried through unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("user '{0}' doesn't exist")]
    NotFound(UserId),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ServiceError::NotFound(id),
            other => ServiceError::Repository(other),
        }
    }
}

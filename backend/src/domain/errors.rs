use super::validation::ValidationError;
use crate::storage::StorageError;

/// Everything a service operation can fail with
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Bad input; nothing was loaded or written
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The backing store could not be read or written; previously persisted data is untouched
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

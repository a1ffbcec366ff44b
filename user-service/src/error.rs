use crate::validation::ValidationError;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// The two request-scoped failure outcomes of the user service.
///
/// Neither is fatal: the collection is never modified when one is returned.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The identifier is malformed or does not name a stored record.
    #[error("record not found")]
    NotFound,

    /// The payload failed one or more field checks.
    #[error("invalid data")]
    Validation(Vec<ValidationError>),
}

impl ServiceError {
    /// Field-level messages carried by a validation failure, in check order.
    pub fn details(&self) -> Vec<String> {
        match self {
            ServiceError::NotFound => Vec::new(),
            ServiceError::Validation(errors) => errors.iter().map(ToString::to_string).collect(),
        }
    }
}

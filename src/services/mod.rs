//! Service layer: the customer directory operations and their error type.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customer;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No row with the requested id exists. Carries the entity name.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The id inside an update payload differs from the id being updated.
    #[error("payload id {payload_id} does not match the updated entity id {id}")]
    IdMismatch { id: i32, payload_id: i32 },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

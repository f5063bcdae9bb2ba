use thiserror::Error;

use crate::store::StoreError;
use crate::validation::{summarize, FieldError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{}", summarize(.0))]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    DuplicateName(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn provider_not_found(id: i64) -> Self { Self::NotFound(format!("Provider with id {id} not found")) }

    pub fn fruit_not_found(id: i64) -> Self { Self::NotFound(format!("Fruit with id {id} not found")) }

    pub fn duplicate_provider(name: &str) -> Self {
        Self::DuplicateName(format!("Provider with name '{name}' already exists"))
    }

    pub fn provider_has_fruits(id: i64) -> Self {
        Self::Conflict(format!("Cannot delete provider with id {id} because it has associated fruits"))
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::NotFound(_) => 1002,
            ServiceError::DuplicateName(_) => 1003,
            ServiceError::Conflict(_) => 1004,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<Vec<FieldError>> for ServiceError {
    fn from(errors: Vec<FieldError>) -> Self { Self::Validation(errors) }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self { Self::Db(err.to_string()) }
}

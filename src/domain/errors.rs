// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("validation error: {0}")]
    Validation(String),
    /// Unique index on a slug column rejected the write. Retryable.
    #[error("slug already exists: {0}")]
    SlugConflict(String),
    #[error("uniqueness conflict: {0}")]
    UniquenessConflict(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    #[must_use]
    pub const fn is_slug_conflict(&self) -> bool {
        matches!(self, DomainError::SlugConflict(_))
    }
}

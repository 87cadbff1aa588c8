// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("data integrity error in article `{slug}`: {reason}")]
    DataIntegrity { slug: String, reason: String },
}

impl DomainError {
    #[must_use]
    pub fn data_integrity(slug: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            slug: slug.into(),
            reason: reason.into(),
        }
    }
}

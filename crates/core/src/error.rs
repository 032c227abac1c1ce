//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, absence). Infrastructure concerns are wrapped as `Unexpected`
/// at the boundary where they cross into the domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank field, length bound, bad email).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A unique key (company nit, product code) already exists.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// A requested resource was not found where existence was required.
    #[error("not found")]
    NotFound,

    /// The operation conflicts with current state (e.g. deleting a company
    /// that still owns products).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A collaborator failed in a way the domain does not classify.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}

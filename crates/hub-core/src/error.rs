//! Domain-specific error types following panic-free policy.

use thiserror::Error;

/// Errors that can occur in domain operations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Provider label did not match any known backend
    #[error("Unknown provider: {value}")]
    UnknownProvider { value: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

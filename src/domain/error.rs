//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid run configurations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid diff-type: '{0}'. Must be one of 'all', 'staged', 'unstaged'")]
    InvalidDiffType(String),

    #[error("filename cannot be empty")]
    EmptyFilename,

    #[error("cannot expand '{0}': user home directory is unknown")]
    HomeDirUnavailable(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

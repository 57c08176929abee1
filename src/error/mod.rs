//! Error handling for the criteria combination core.
//!
//! Only upstream fetch failures are errors: a failed metadata load or a
//! failed descendant fetch aborts the whole combination with no partial
//! result. Data-integrity skew (orphaned nodes, unresolvable owners) is
//! handled by exclusion and surfaced through diagnostics, never through
//! this type.

use thiserror::Error;

/// Specialized error type for criteria combination
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// Failure loading sections, questions, and answers
    #[error("Metadata error: {0}")]
    Metadata(String),
    /// Failure loading criteria descendants
    #[error("Repository error: {0}")]
    Repository(String),
    /// Any other failure raised by a loader implementation
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CriteriaError {
    /// Create a metadata loader error
    #[must_use]
    pub fn metadata_error(message: impl Into<String>) -> Self {
        Self::Metadata(message.into())
    }

    /// Create a criteria repository error
    #[must_use]
    pub fn repository_error(message: impl Into<String>) -> Self {
        Self::Repository(message.into())
    }
}

/// Result type for criteria combination operations
pub type Result<T> = std::result::Result<T, CriteriaError>;

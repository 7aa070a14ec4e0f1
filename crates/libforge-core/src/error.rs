//! Unified error handling for libforge core.
//!
//! Wraps domain and application errors in one type carrying a category and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for libforge core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibforgeError {
    /// Errors from the domain layer (naming and mapping rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl LibforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input: invalid name, target already exists.
    Validation,
    /// An external tool failed or produced an unexpected result.
    ExternalTool,
    /// An external tool is missing or misconfigured.
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type LibforgeResult<T> = Result<T, LibforgeError>;

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are raised before any filesystem mutation happens, so they
/// are always safe to report and retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid library name '{name}': {reason}")]
    InvalidLibraryName { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Mapping Errors
    // ========================================================================
    #[error("'{path}' is not inside the library directory '{library_dir}'")]
    OutsideLibrary { path: String, library_dir: String },

    #[error("'{path}' has no file name")]
    MissingFileName { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLibraryName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use letters, digits, '.', '-' and '_'".into(),
                "Examples: Widgets, Acme.Collections, my-lib".into(),
            ],
            Self::OutsideLibrary { library_dir, .. } => vec![
                format!("Only files below '{}' get test stubs", library_dir),
                "Run sync-tests from the solution directory".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLibraryName { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. }
            | Self::OutsideLibrary { .. }
            | Self::MissingFileName { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

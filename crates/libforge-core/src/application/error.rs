//! Application layer errors.
//!
//! These errors represent failures while orchestrating a run: the target
//! already exists, an external tool misbehaved, or the filesystem refused.
//! Naming and mapping errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The solution directory exists before the run started.
    #[error("{} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// An external tool exited with a status the step does not accept.
    #[error("`{command}` failed with exit code {exit_code}")]
    ToolInvocation {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// An external tool could not be found or started.
    #[error("Cannot run '{program}': {reason}")]
    ToolUnavailable { program: String, reason: String },

    /// The post-scaffold test run did not fail the way the stubs should.
    #[error("Unexpected test result: expected exit code {expected}, got {actual}")]
    UnexpectedTestResult { expected: i32, actual: i32 },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// A shared adapter lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different library name".into(),
                "Or remove the directory and run again".into(),
            ],
            Self::ToolInvocation { command, stderr, .. } => {
                let mut out = vec![format!("Command failed: {}", command)];
                if let Some(line) = stderr.lines().rev().find(|l| !l.trim().is_empty()) {
                    out.push(format!("Last error output: {}", line.trim()));
                }
                out.push("The partially created directory was left for inspection".into());
                out
            }
            Self::ToolUnavailable { program, .. } => vec![
                format!("'{}' was not found or could not be started", program),
                "Ensure the .NET SDK and git are installed and in your PATH".into(),
                "Or point tools.dotnet / tools.git at them in the configuration".into(),
            ],
            Self::UnexpectedTestResult { actual, .. } => vec![
                "Every generated test stub should fail right after scaffolding".into(),
                match actual {
                    0 => "The test run passed, so no stub test was executed".into(),
                    _ => "The test run did not complete; check the build output".into(),
                },
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::ToolInvocation { .. } | Self::UnexpectedTestResult { .. } => {
                ErrorCategory::ExternalTool
            }
            Self::ToolUnavailable { .. } => ErrorCategory::Configuration,
            Self::Filesystem { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_is_validation() {
        let e = ApplicationError::AlreadyExists {
            path: PathBuf::from("/w/Widgets"),
        };
        assert_eq!(e.category(), ErrorCategory::Validation);
        assert!(e.to_string().contains("already exists"));
    }

    #[test]
    fn tool_failure_suggests_last_stderr_line() {
        let e = ApplicationError::ToolInvocation {
            command: "dotnet pack Widgets.sln".into(),
            exit_code: 1,
            stderr: "warning\nerror CS1002: ; expected\n\n".into(),
        };
        assert_eq!(e.category(), ErrorCategory::ExternalTool);
        assert!(e.suggestions().iter().any(|s| s.contains("CS1002")));
    }

    #[test]
    fn unexpected_test_result_message() {
        let e = ApplicationError::UnexpectedTestResult {
            expected: 1,
            actual: 0,
        };
        assert_eq!(
            e.to_string(),
            "Unexpected test result: expected exit code 1, got 0"
        );
    }
}

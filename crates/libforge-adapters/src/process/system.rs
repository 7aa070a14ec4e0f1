//! Child-process tool runner using std::process.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::trace;

use libforge_core::{
    application::{
        ApplicationError,
        ports::{ToolInvocation, ToolOutput, ToolRunner},
    },
    error::LibforgeResult,
};

/// Production tool runner: resolves the program on `PATH` and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl SystemToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> LibforgeResult<ToolOutput> {
        let program = resolve_program(invocation.program(), invocation.working_dir())?;

        let output = Command::new(&program)
            .args(invocation.arguments())
            .current_dir(invocation.working_dir())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::ToolUnavailable {
                program: program.display().to_string(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        for line in stdout.lines().chain(stderr.lines()) {
            trace!(program = invocation.program(), "{line}");
        }

        Ok(ToolOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
        })
    }
}

/// Look `program` up on `PATH`; names with a separator resolve against `cwd`.
fn resolve_program(program: &str, cwd: &Path) -> LibforgeResult<PathBuf> {
    which::which_in(program, std::env::var_os("PATH"), cwd).map_err(|e| {
        ApplicationError::ToolUnavailable {
            program: program.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use libforge_core::error::LibforgeError;
    use tempfile::TempDir;

    #[test]
    fn captures_exit_code_and_output() {
        let tmp = TempDir::new().unwrap();
        let inv = ToolInvocation::new("sh", tmp.path())
            .args(["-c", "echo out; echo err >&2; exit 3"])
            .tolerate_failure();

        let output = SystemToolRunner::new().run(&inv).unwrap();
        assert_eq!(output.exit_code, 3);
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
    }

    #[test]
    fn runs_in_working_directory() {
        let tmp = TempDir::new().unwrap();
        let inv = ToolInvocation::new("sh", tmp.path()).args(["-c", "touch marker"]);
        SystemToolRunner::new().run(&inv).unwrap();
        assert!(tmp.path().join("marker").exists());
    }

    #[test]
    fn unknown_program_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let inv = ToolInvocation::new("libforge-no-such-tool-xyz", tmp.path());
        assert!(matches!(
            SystemToolRunner::new().run(&inv),
            Err(LibforgeError::Application(ApplicationError::ToolUnavailable { .. }))
        ));
    }
}

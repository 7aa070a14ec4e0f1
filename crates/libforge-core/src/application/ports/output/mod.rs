//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `libforge-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::LibforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `libforge_adapters::filesystem::LocalFilesystem` (production)
/// - `libforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> LibforgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> LibforgeResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a file. Returns `false` if there was nothing to remove.
    fn remove_file_if_exists(&self, path: &Path) -> LibforgeResult<bool>;

    /// All files below `root`, recursively, sorted by path.
    fn list_files(&self, root: &Path) -> LibforgeResult<Vec<PathBuf>>;
}

/// Port for running external tools (`dotnet`, `git`).
///
/// Implementations only spawn and wait; whether a non-zero exit code is an
/// error is decided by the caller from [`ToolInvocation::tolerates_failure`].
#[cfg_attr(test, mockall::automock)]
pub trait ToolRunner: Send + Sync {
    /// Run the invocation to completion and capture its output.
    ///
    /// Fails only if the program cannot be resolved or started.
    fn run(&self, invocation: &ToolInvocation) -> LibforgeResult<ToolOutput>;
}

/// One external command, as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
    tolerate_failure: bool,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
            tolerate_failure: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append a path argument.
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.display().to_string())
    }

    /// Accept any exit code; the caller inspects it.
    pub fn tolerate_failure(mut self) -> Self {
        self.tolerate_failure = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn tolerates_failure(&self) -> bool {
        self.tolerate_failure
    }

    /// `true` if this runs `program` with `args` as its leading arguments.
    pub fn is(&self, program: &str, args: &[&str]) -> bool {
        self.program == program
            && self.args.len() >= args.len()
            && self.args.iter().zip(args).all(|(a, b)| a == b)
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Process exit code; `-1` if the process was killed by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Self::default()
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `libforge-adapters` implement them.
//!
//! - `Filesystem`: file and directory operations
//! - `ToolRunner`: running `dotnet` and `git` as child processes

pub mod output;

pub use output::{Filesystem, ToolInvocation, ToolOutput, ToolRunner};

#[cfg(test)]
pub use output::{MockFilesystem, MockToolRunner};

//! Infrastructure adapters for libforge.
//!
//! This crate implements the ports defined in `libforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingToolRunner, SystemToolRunner};

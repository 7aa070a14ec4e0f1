//! Application layer for libforge.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`, `TestStubSynchronizer`)
//! - **Ports**: traits for the filesystem and external tools
//! - **Errors**: orchestration error types
//!
//! Naming and path rules live in `crate::domain`; this layer only sequences
//! them against the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ArtifactWriter, DEFAULT_AUTHOR, ScaffoldOptions, ScaffoldService, StubStatus, SyncEntry, SyncReport,
    TestStubSynchronizer,
};

pub use ports::{Filesystem, ToolInvocation, ToolOutput, ToolRunner};

pub use error::ApplicationError;

//! libforge Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the libforge library scaffolder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          libforge-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, TestStubSynchronizer) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, ToolRunner)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    libforge-adapters (Infrastructure)   │
//! │ (LocalFilesystem, SystemToolRunner, …)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use libforge_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>, tools: Box<dyn ToolRunner>) -> LibforgeResult<()> {
//! let library = LibraryDescriptor::new("Widgets", "/work")?;
//! let service = ScaffoldService::new(filesystem, tools, ScaffoldOptions::default());
//! let files = service.create_library(&library)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOptions, ScaffoldService, StubStatus, SyncReport, TestStubSynchronizer,
        ports::{Filesystem, ToolInvocation, ToolOutput, ToolRunner},
    };
    pub use crate::domain::{LibraryDescriptor, RelativePath, to_type_name};
    pub use crate::error::{LibforgeError, LibforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Application services - orchestrate use cases.
//!
//! - [`ScaffoldService`]: create a new library solution end to end
//! - [`TestStubSynchronizer`]: add missing test stubs to an existing solution
//! - [`ArtifactWriter`]: persist boilerplate artifacts

pub mod artifact_writer;
pub mod scaffold_service;
pub mod test_sync;
pub mod tool_invoker;

pub use artifact_writer::ArtifactWriter;
pub use scaffold_service::{
    DEFAULT_AUTHOR, EXPECTED_TEST_EXIT_CODE, ScaffoldOptions, ScaffoldService,
};
pub use test_sync::{StubStatus, SyncEntry, SyncReport, TestStubSynchronizer};
pub use tool_invoker::run_checked;

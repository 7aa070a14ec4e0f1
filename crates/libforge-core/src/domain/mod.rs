//! Core domain layer for libforge.
//!
//! Pure logic only: naming, path derivation and artifact content. All I/O
//! (filesystem, child processes) is reached through the ports defined in
//! [`crate::application::ports`].
//!
//! - [`identifier`]: library name → type name
//! - [`library`]: the [`LibraryDescriptor`] computed once per run
//! - [`test_mapping`]: source file → test file
//! - [`artifacts`]: license, readme, ignore rules and the other text files

pub mod artifacts;
pub mod common;
pub mod error;
pub mod identifier;
pub mod library;
pub mod render;
pub mod test_mapping;

pub use artifacts::Artifact;
pub use common::RelativePath;
pub use error::{DomainError, ErrorCategory};
pub use identifier::to_type_name;
pub use library::{LibraryDescriptor, SOURCE_EXTENSION, TEST_SUFFIX, validate_library_name};
pub use render::RenderContext;
pub use test_mapping::test_file_for;

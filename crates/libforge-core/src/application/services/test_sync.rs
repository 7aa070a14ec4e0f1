//! Test-stub synchronization.
//!
//! Every library source file gets a companion test file. Missing test files
//! are created as failing stubs; existing ones are never touched, so running
//! the synchronizer again cannot destroy hand-written tests.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        DomainError, LibraryDescriptor, RelativePath, SOURCE_EXTENSION,
        artifacts::{self, IGNORED_DIRS},
        test_file_for,
        test_mapping::test_class_name,
    },
    error::LibforgeResult,
};

/// What happened to one test file during a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubStatus {
    /// A stub was written.
    Created,
    /// A file was already there and was left alone.
    Existing,
}

/// One source file and its test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    /// Source path relative to the solution directory.
    pub source: RelativePath,
    /// Absolute test file path.
    pub test_file: PathBuf,
    pub status: StubStatus,
}

/// Result of one synchronization pass, in source path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub entries: Vec<SyncEntry>,
}

impl SyncReport {
    /// Every test file path, whether it was created or already existed.
    pub fn test_files(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.test_file.clone()).collect()
    }

    pub fn created(&self) -> impl Iterator<Item = &SyncEntry> {
        self.entries.iter().filter(|e| e.status == StubStatus::Created)
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }
}

/// Creates missing test stubs for the sources of one library.
pub struct TestStubSynchronizer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TestStubSynchronizer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Ensure every source file of `library` has a test file.
    ///
    /// A library without a module directory has no sources and yields an
    /// empty report. The first filesystem failure aborts the pass.
    #[instrument(skip_all, fields(library = %library.name()))]
    pub fn sync(&self, library: &LibraryDescriptor) -> LibforgeResult<SyncReport> {
        let library_dir = library.library_dir();
        if !self.filesystem.exists(library_dir) {
            debug!(dir = %library_dir.display(), "No library directory, nothing to sync");
            return Ok(SyncReport::default());
        }

        let mut report = SyncReport::default();
        for file in self.filesystem.list_files(library_dir)? {
            if !is_source_file(&file) || in_build_output(&file, library_dir) {
                continue;
            }
            report.entries.push(self.provide_test_file(library, &file)?);
        }

        info!(
            sources = report.entries.len(),
            created = report.created_count(),
            "Test stubs synchronized"
        );
        Ok(report)
    }

    fn provide_test_file(&self, library: &LibraryDescriptor, file: &Path) -> LibforgeResult<SyncEntry> {
        let solution_dir = library.solution_dir();
        let relative = file
            .strip_prefix(solution_dir)
            .map_err(|_| DomainError::OutsideLibrary {
                path: file.display().to_string(),
                library_dir: library.library_dir().display().to_string(),
            })?;
        let source = RelativePath::try_new(relative)?;
        let test_file = test_file_for(&source)?.under(solution_dir);

        if self.filesystem.is_file(&test_file) {
            debug!(test_file = %test_file.display(), "Test file exists, skipping");
            return Ok(SyncEntry {
                source,
                test_file,
                status: StubStatus::Existing,
            });
        }

        if let Some(parent) = test_file.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        let content = artifacts::test_stub(library.namespace(), &test_class_name(&source), &source);
        self.filesystem.write_file(&test_file, &content)?;
        debug!(test_file = %test_file.display(), "Test stub created");

        Ok(SyncEntry {
            source,
            test_file,
            status: StubStatus::Created,
        })
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

/// `true` for files below a top-level build output directory of the module.
fn in_build_output(path: &Path, library_dir: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(library_dir) else {
        return false;
    };
    let mut components = relative.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(first)), Some(_)) => {
            IGNORED_DIRS.iter().any(|dir| first == *dir)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::application::ApplicationError;
    use crate::error::LibforgeError;

    fn widgets() -> LibraryDescriptor {
        LibraryDescriptor::new("Widgets", "/w").unwrap()
    }

    #[test]
    fn build_output_is_recognised() {
        let lib = Path::new("/w/Widgets/Widgets");
        assert!(in_build_output(&lib.join("obj").join("Gen.cs"), lib));
        assert!(in_build_output(&lib.join("bin").join("x").join("Gen.cs"), lib));
        assert!(!in_build_output(&lib.join("Objects").join("Gen.cs"), lib));
        assert!(!in_build_output(&lib.join("obj.cs"), lib));
    }

    #[test]
    fn only_cs_files_are_sources() {
        assert!(is_source_file(Path::new("a/B.cs")));
        assert!(!is_source_file(Path::new("a/B.csproj")));
        assert!(!is_source_file(Path::new("a/.gitignore")));
    }

    #[test]
    fn existing_test_file_is_not_written() {
        let lib = widgets();
        let source = lib.library_dir().join("Gear.cs");
        let test_file = lib.test_dir().join("Gear.Tests.cs");

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_list_files()
            .returning(move |_| Ok(vec![source.clone()]));
        fs.expect_is_file()
            .with(eq(test_file.clone()))
            .returning(|_| true);
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let report = TestStubSynchronizer::new(&fs).sync(&lib).unwrap();
        assert_eq!(report.test_files(), vec![test_file]);
        assert_eq!(report.created_count(), 0);
    }

    #[test]
    fn missing_library_dir_yields_empty_report() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_list_files().never();
        fs.expect_write_file().never();

        let report = TestStubSynchronizer::new(&fs).sync(&widgets()).unwrap();
        assert_eq!(report, SyncReport::default());
    }

    #[test]
    fn write_failure_is_returned_and_stops_the_pass() {
        let lib = widgets();
        let sources = vec![
            lib.library_dir().join("Gear.cs"),
            lib.library_dir().join("Sprocket.cs"),
        ];
        let failed = lib.test_dir().join("Gear.Tests.cs");

        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_list_files()
            .returning(move |_| Ok(sources.clone()));
        fs.expect_is_file().times(1).returning(|_| false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file()
            .times(1)
            .returning(|path, _| {
                Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });

        let err = TestStubSynchronizer::new(&fs).sync(&lib).unwrap_err();
        assert_eq!(
            err,
            LibforgeError::Application(ApplicationError::Filesystem {
                path: failed,
                reason: "disk full".into(),
            })
        );
    }
}

//! Scaffold Service - main application orchestrator.
//!
//! Creates a complete library solution:
//! 1. Check the solution directory does not exist, then create it
//! 2. Generate solution, library and test projects and a git repository
//!    (four independent tool runs, in parallel)
//! 3. Remove the `Class1.cs` / `UnitTest1.cs` placeholders
//! 4. Register both projects in the solution
//! 5. Write the boilerplate artifacts and synchronize test stubs
//! 6. Pack, run the (failing) stub tests, commit
//!
//! A failure aborts the run. Nothing is rolled back: the directory is left
//! in place so the failing step can be inspected.

use std::path::PathBuf;
use std::thread;

use tracing::{Span, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ToolInvocation, ToolOutput, ToolRunner},
        services::{ArtifactWriter, TestStubSynchronizer, tool_invoker::run_checked},
    },
    domain::{LibraryDescriptor, RenderContext, artifacts},
    error::LibforgeResult,
};

/// `dotnet test` exit code when tests ran and at least one failed.
///
/// Every generated stub fails, so this is the only acceptable outcome right
/// after scaffolding.
pub const EXPECTED_TEST_EXIT_CODE: i32 = 1;

/// Copyright holder written into every LICENSE unless overridden.
pub const DEFAULT_AUTHOR: &str = "The libforge Authors and Contributors";

/// Tool names and fixed texts used by a scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Build tool executable.
    pub dotnet: String,
    /// Version-control executable.
    pub git: String,
    /// `dotnet new` template for the library project.
    pub library_template: String,
    /// `dotnet new` template for the test project.
    pub test_template: String,
    pub commit_message: String,
    /// License copyright holder.
    pub author: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            dotnet: "dotnet".into(),
            git: "git".into(),
            library_template: "classlib".into(),
            test_template: "nunit".into(),
            commit_message: "autogenerated nuget library skeleton".into(),
            author: DEFAULT_AUTHOR.into(),
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    tools: Box<dyn ToolRunner>,
    options: ScaffoldOptions,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        tools: Box<dyn ToolRunner>,
        options: ScaffoldOptions,
    ) -> Self {
        Self {
            filesystem,
            tools,
            options,
        }
    }

    /// Create a new library solution and return every file below it.
    #[instrument(
        skip_all,
        fields(
            library = %library.name(),
            solution_dir = %library.solution_dir().display()
        )
    )]
    pub fn create_library(&self, library: &LibraryDescriptor) -> LibforgeResult<Vec<PathBuf>> {
        let solution_dir = library.solution_dir();
        if self.filesystem.exists(solution_dir) {
            return Err(ApplicationError::AlreadyExists {
                path: solution_dir.to_path_buf(),
            }
            .into());
        }

        self.filesystem.create_dir_all(solution_dir)?;
        info!("Solution directory created");

        self.generate_projects(library)?;
        self.remove_placeholders(library)?;

        for project in [library.library_project(), library.test_project()] {
            self.run(
                &self
                    .dotnet(library)
                    .arg("sln")
                    .path_arg(library.solution_file())
                    .arg("add")
                    .path_arg(project),
            )?;
        }
        info!("Projects registered in solution");

        self.write_artifacts(library)?;
        TestStubSynchronizer::new(self.filesystem.as_ref()).sync(library)?;

        self.run(&self.dotnet(library).arg("pack").path_arg(library.solution_file()))?;
        info!("Solution packed");

        self.verify_stub_tests_fail(library)?;

        self.run(&self.git(library).args(["add", "."]))?;
        self.run(
            &self
                .git(library)
                .args(["commit", "-a", "-m"])
                .arg(self.options.commit_message.as_str()),
        )?;
        info!("Initial commit created");

        self.filesystem.list_files(solution_dir)
    }

    /// Write the boilerplate artifacts, in a fixed order.
    pub fn write_artifacts(&self, library: &LibraryDescriptor) -> LibforgeResult<Vec<PathBuf>> {
        let ctx = RenderContext::for_library(library, &self.options.author);
        let writer = ArtifactWriter::new(self.filesystem.as_ref(), library.solution_dir());

        let artifacts = [
            artifacts::default_class(library, &ctx),
            artifacts::ignore_rules(library.name()),
            artifacts::ignore_rules(library.test_name()),
            artifacts::version_config(),
            artifacts::internals_visible_to_tests(library, &ctx),
            artifacts::license(&ctx),
            artifacts::readme(&ctx),
        ];

        let written = artifacts
            .iter()
            .map(|a| writer.write(a))
            .collect::<LibforgeResult<Vec<_>>>()?;
        info!(count = written.len(), "Artifacts written");
        Ok(written)
    }

    /// Run the four independent generators concurrently and wait for all.
    fn generate_projects(&self, library: &LibraryDescriptor) -> LibforgeResult<()> {
        let invocations = [
            self.dotnet(library)
                .args(["new", "sln", "--name"])
                .arg(library.name()),
            self.dotnet(library)
                .args(["new", self.options.library_template.as_str(), "--name"])
                .arg(library.name())
                .arg("--output")
                .path_arg(library.library_dir()),
            self.dotnet(library)
                .args(["new", self.options.test_template.as_str(), "--name"])
                .arg(library.test_name())
                .arg("--output")
                .path_arg(library.test_dir()),
            self.git(library).arg("init"),
        ];

        let tools = self.tools.as_ref();
        let results: Vec<LibforgeResult<ToolOutput>> = thread::scope(|scope| {
            let handles: Vec<_> = invocations
                .iter()
                .map(|invocation| {
                    let span = Span::current();
                    scope.spawn(move || span.in_scope(|| run_checked(tools, invocation)))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        for result in results {
            result?;
        }
        info!("Solution, projects and repository generated");
        Ok(())
    }

    /// Delete the template placeholders; absent files are fine.
    fn remove_placeholders(&self, library: &LibraryDescriptor) -> LibforgeResult<()> {
        for placeholder in [
            library.library_dir().join("Class1.cs"),
            library.test_dir().join("UnitTest1.cs"),
        ] {
            if self.filesystem.remove_file_if_exists(&placeholder)? {
                info!(path = %placeholder.display(), "Placeholder removed");
            }
        }
        Ok(())
    }

    fn verify_stub_tests_fail(&self, library: &LibraryDescriptor) -> LibforgeResult<()> {
        let outcome = self.run(
            &self
                .dotnet(library)
                .arg("test")
                .path_arg(library.solution_file())
                .tolerate_failure(),
        )?;

        if outcome.exit_code != EXPECTED_TEST_EXIT_CODE {
            return Err(ApplicationError::UnexpectedTestResult {
                expected: EXPECTED_TEST_EXIT_CODE,
                actual: outcome.exit_code,
            }
            .into());
        }
        info!("Stub tests fail as expected");
        Ok(())
    }

    fn run(&self, invocation: &ToolInvocation) -> LibforgeResult<ToolOutput> {
        run_checked(self.tools.as_ref(), invocation)
    }

    fn dotnet(&self, library: &LibraryDescriptor) -> ToolInvocation {
        ToolInvocation::new(self.options.dotnet.as_str(), library.solution_dir())
    }

    fn git(&self, library: &LibraryDescriptor) -> ToolInvocation {
        ToolInvocation::new(self.options.git.as_str(), library.solution_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockToolRunner};
    use crate::error::LibforgeError;

    #[test]
    fn existing_directory_aborts_before_any_mutation() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(1).returning(|_| true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        let mut tools = MockToolRunner::new();
        tools.expect_run().never();

        let service = ScaffoldService::new(Box::new(fs), Box::new(tools), ScaffoldOptions::default());
        let lib = LibraryDescriptor::new("Widgets", "/w").unwrap();

        let err = service.create_library(&lib).unwrap_err();
        assert_eq!(
            err,
            LibforgeError::Application(ApplicationError::AlreadyExists {
                path: PathBuf::from("/w/Widgets")
            })
        );
    }

    #[test]
    fn generator_failure_stops_the_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_remove_file_if_exists().never();
        fs.expect_write_file().never();

        let mut tools = MockToolRunner::new();
        tools.expect_run().times(4).returning(|inv| {
            let code = if inv.is("git", &["init"]) { 128 } else { 0 };
            Ok(ToolOutput::with_exit_code(code))
        });

        let service = ScaffoldService::new(Box::new(fs), Box::new(tools), ScaffoldOptions::default());
        let lib = LibraryDescriptor::new("Widgets", "/w").unwrap();

        let err = service.create_library(&lib).unwrap_err();
        assert!(matches!(
            err,
            LibforgeError::Application(ApplicationError::ToolInvocation { exit_code: 128, .. })
        ));
    }

    #[test]
    fn license_does_not_depend_on_library_name() {
        let license_of = |name: &str| {
            let mut fs = MockFilesystem::new();
            fs.expect_create_dir_all().returning(|_| Ok(()));
            let written = std::sync::Arc::new(std::sync::Mutex::new(String::new()));
            let sink = written.clone();
            fs.expect_write_file().returning(move |path, content| {
                if path.file_name().is_some_and(|n| n == "LICENSE") {
                    *sink.lock().unwrap() = content.to_string();
                }
                Ok(())
            });
            let service = ScaffoldService::new(
                Box::new(fs),
                Box::new(MockToolRunner::new()),
                ScaffoldOptions::default(),
            );
            let lib = LibraryDescriptor::new(name, "/w").unwrap();
            service.write_artifacts(&lib).unwrap();
            written.lock().unwrap().clone()
        };

        let widgets = license_of("Widgets");
        assert!(widgets.contains(&format!("Copyright (c) {DEFAULT_AUTHOR}")));
        assert_eq!(widgets, license_of("Gadgets"));
    }
}

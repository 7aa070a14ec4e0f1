//! Implementation of the `libforge new` command.
//!
//! Responsibility: turn the name into a [`LibraryDescriptor`] rooted at the
//! current directory, run the core scaffold service against the real
//! filesystem and tools, and display the created files. No business logic
//! lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use libforge_adapters::{LocalFilesystem, SystemToolRunner};
use libforge_core::{
    application::ScaffoldService, domain::LibraryDescriptor, error::LibforgeError,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// JSON result of `libforge new`.
#[derive(Debug, Serialize)]
pub struct NewReport {
    pub solution_dir: PathBuf,
    /// Solution-relative paths, `/`-separated, sorted.
    pub files: Vec<String>,
}

/// Execute the `libforge new` command.
#[instrument(skip_all, fields(library = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()
        .with_cli_context(|| "Failed to determine the current directory")?;
    let library = LibraryDescriptor::new(args.name.as_str(), &cwd).map_err(LibforgeError::from)?;

    let mut options = config.to_scaffold_options();
    if let Some(author) = args.author {
        options.author = author;
    }

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemToolRunner::new()),
        options,
    );

    if output.format() != OutputFormat::Json {
        output.header(&format!("Creating '{}'...", library.name()))?;
    }
    info!(path = %library.solution_dir().display(), "Scaffold started");

    let files = service.create_library(&library)?;

    let report = NewReport {
        solution_dir: library.solution_dir().to_path_buf(),
        files: relative_listing(library.solution_dir(), &files),
    };
    info!(files = report.files.len(), "Scaffold completed");

    if output.is_json() {
        return output.json(&report);
    }

    for file in &report.files {
        output.print(file)?;
    }
    output.success(&format!(
        "Library '{}' created with {} files",
        library.name(),
        report.files.len()
    ))?;
    Ok(())
}

/// Strip `root` from every path and join the components with `/`.
pub fn relative_listing(root: &Path, files: &[PathBuf]) -> Vec<String> {
    let mut listing: Vec<String> = files
        .iter()
        .map(|file| {
            let relative = file.strip_prefix(root).unwrap_or(file.as_path());
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    listing.sort();
    listing
}

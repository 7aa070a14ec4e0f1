//! The library descriptor: every name and path a scaffold run needs.
//!
//! Everything is derived once, in [`LibraryDescriptor::new`], from the
//! library name and the directory the solution is created in. The descriptor
//! is then passed by reference to every step; nothing is recomputed later.
//!
//! ```text
//! <base>/<name>/                    solution_dir
//!   <name>.sln                      solution_file
//!   <name>/                         library_dir
//!     <name>.csproj                 library_project
//!   <name>.Tests/                   test_dir
//!     <name>.Tests.csproj           test_project
//! ```

use std::path::{Path, PathBuf};

use super::{DomainError, identifier::to_type_name};

/// Suffix appended to the library name for the test module, and to source
/// file stems for test files.
pub const TEST_SUFFIX: &str = ".Tests";

/// Extension of library source files.
pub const SOURCE_EXTENSION: &str = "cs";

/// Derived names and paths for one library solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDescriptor {
    name: String,
    namespace: String,
    type_name: String,
    test_name: String,
    solution_dir: PathBuf,
    solution_file: PathBuf,
    library_dir: PathBuf,
    library_project: PathBuf,
    test_dir: PathBuf,
    test_project: PathBuf,
}

impl LibraryDescriptor {
    /// Describe a library called `name` whose solution lives in `base_dir/name`.
    pub fn new(name: impl Into<String>, base_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_library_name(&name)?;
        let solution_dir = base_dir.as_ref().join(&name);
        Ok(Self::derive(name, solution_dir))
    }

    /// Describe the library of an existing solution directory.
    ///
    /// The library name is the directory's own name.
    pub fn from_solution_dir(solution_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let solution_dir = solution_dir.into();
        let name = solution_dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::InvalidLibraryName {
                name: solution_dir.display().to_string(),
                reason: "cannot extract a library name from the directory".into(),
            })?
            .to_string();
        validate_library_name(&name)?;
        Ok(Self::derive(name, solution_dir))
    }

    fn derive(name: String, solution_dir: PathBuf) -> Self {
        let test_name = format!("{name}{TEST_SUFFIX}");
        let library_dir = solution_dir.join(&name);
        let test_dir = solution_dir.join(&test_name);
        Self {
            namespace: name.clone(),
            type_name: to_type_name(&name),
            solution_file: solution_dir.join(format!("{name}.sln")),
            library_project: library_dir.join(format!("{name}.csproj")),
            test_project: test_dir.join(format!("{test_name}.csproj")),
            library_dir,
            test_dir,
            solution_dir,
            test_name,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace of the library sources (and of generated test stubs).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name of the default class, see [`to_type_name`].
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name of the test module, `<name>.Tests`.
    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn solution_dir(&self) -> &Path {
        &self.solution_dir
    }

    pub fn solution_file(&self) -> &Path {
        &self.solution_file
    }

    pub fn library_dir(&self) -> &Path {
        &self.library_dir
    }

    pub fn library_project(&self) -> &Path {
        &self.library_project
    }

    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    pub fn test_project(&self) -> &Path {
        &self.test_project
    }
}

/// Reject names that cannot become a directory and a type name.
pub fn validate_library_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidLibraryName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if to_type_name(name).is_empty() {
        return Err(invalid("name must contain at least one letter or digit"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widgets() -> LibraryDescriptor {
        LibraryDescriptor::new("Widgets", "/work").unwrap()
    }

    #[test]
    fn paths_follow_the_solution_layout() {
        let lib = widgets();
        let root = Path::new("/work/Widgets");
        assert_eq!(lib.solution_dir(), root);
        assert_eq!(lib.solution_file(), root.join("Widgets.sln"));
        assert_eq!(lib.library_dir(), root.join("Widgets"));
        assert_eq!(lib.library_project(), root.join("Widgets").join("Widgets.csproj"));
        assert_eq!(lib.test_dir(), root.join("Widgets.Tests"));
        assert_eq!(
            lib.test_project(),
            root.join("Widgets.Tests").join("Widgets.Tests.csproj")
        );
    }

    #[test]
    fn every_path_is_below_the_solution_dir() {
        let lib = widgets();
        for p in [
            lib.solution_file(),
            lib.library_dir(),
            lib.library_project(),
            lib.test_dir(),
            lib.test_project(),
        ] {
            assert!(p.starts_with(lib.solution_dir()), "{} escapes", p.display());
        }
    }

    #[test]
    fn names_are_derived() {
        let lib = LibraryDescriptor::new("acme-widgets", "/w").unwrap();
        assert_eq!(lib.namespace(), "acme-widgets");
        assert_eq!(lib.test_name(), "acme-widgets.Tests");
        assert_eq!(lib.type_name(), "AcmeWidgets");
    }

    #[test]
    fn from_solution_dir_uses_directory_name() {
        let lib = LibraryDescriptor::from_solution_dir("/work/Widgets").unwrap();
        assert_eq!(lib, widgets());
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["", ".hidden", "a/b", "a\\b", "---"] {
            assert!(
                matches!(
                    LibraryDescriptor::new(name, "/w"),
                    Err(DomainError::InvalidLibraryName { .. })
                ),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn valid_names_pass() {
        for name in ["Widgets", "Acme.Collections", "my-lib", "lib_2"] {
            assert!(validate_library_name(name).is_ok(), "rejected {name}");
        }
    }
}

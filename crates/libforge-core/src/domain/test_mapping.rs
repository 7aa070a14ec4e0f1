//! Source file → test file mapping.
//!
//! For a source file `Widgets/Sub/Foo.cs` (relative to the solution root) the
//! test file is `Widgets.Tests/Sub/Foo.Tests.cs`: the first segment gets the
//! test suffix, and so does the stem of the last segment.

use std::path::Path;

use super::{DomainError, common::RelativePath, library::TEST_SUFFIX};

/// Map a solution-relative source path to its solution-relative test path.
///
/// A single-segment path (a file directly in the solution root) maps to
/// `<stem>.Tests<ext>` because the first and last segment coincide.
pub fn test_file_for(source: &RelativePath) -> Result<RelativePath, DomainError> {
    let mut segments = source.segments();
    let Some(file_name) = segments.last().cloned() else {
        return Err(DomainError::MissingFileName {
            path: source.to_string(),
        });
    };

    let last = segments.len() - 1;
    if last > 0 {
        segments[0].push_str(TEST_SUFFIX);
    }
    segments[last] = test_file_name(&file_name);

    Ok(RelativePath::from_segments(segments))
}

/// `Foo.cs` → `Foo.Tests.cs`, `Foo` → `Foo.Tests`.
pub fn test_file_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    match path.extension() {
        Some(ext) => format!("{stem}{TEST_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{TEST_SUFFIX}"),
    }
}

/// The test class name for a source file: its stem, without extension.
pub fn test_class_name(source: &RelativePath) -> String {
    source
        .as_path()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn rel(segments: &[&str]) -> RelativePath {
        RelativePath::from_segments(segments)
    }

    #[test]
    fn top_level_source_file() {
        let test = test_file_for(&rel(&["Widgets", "Widgets.cs"])).unwrap();
        assert_eq!(test, rel(&["Widgets.Tests", "Widgets.Tests.cs"]));
    }

    #[test]
    fn nested_source_file_keeps_inner_directories() {
        let test = test_file_for(&rel(&["Widgets", "Shapes", "Round", "Circle.cs"])).unwrap();
        assert_eq!(test, rel(&["Widgets.Tests", "Shapes", "Round", "Circle.Tests.cs"]));
    }

    #[test]
    fn only_the_last_extension_is_kept() {
        assert_eq!(test_file_name("Foo.Designer.cs"), "Foo.Designer.Tests.cs");
    }

    #[test]
    fn extensionless_file() {
        assert_eq!(test_file_name("Makefile"), "Makefile.Tests");
    }

    #[test]
    fn empty_path_is_an_error() {
        assert!(matches!(
            test_file_for(&rel(&[])),
            Err(DomainError::MissingFileName { .. })
        ));
    }

    #[test]
    fn class_name_is_the_stem() {
        assert_eq!(test_class_name(&rel(&["Widgets", "Sub", "Gear.cs"])), "Gear");
    }

    #[test]
    fn mapping_is_injective_for_distinct_names() {
        let sources = [
            rel(&["Widgets", "A.cs"]),
            rel(&["Widgets", "B.cs"]),
            rel(&["Widgets", "Sub", "A.cs"]),
            rel(&["Widgets", "Sub", "B.cs"]),
            rel(&["Widgets", "A.Tests.cs"]),
        ];
        let mapped: HashSet<_> = sources.iter().map(|s| test_file_for(s).unwrap()).collect();
        assert_eq!(mapped.len(), sources.len());
    }
}

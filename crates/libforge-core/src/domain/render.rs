//! Variable substitution for artifact templates.

use std::collections::HashMap;

use super::library::LibraryDescriptor;

/// Context for template rendering.
///
/// Holds the variables a template may reference as `{{VARIABLE}}`.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `NAME` | "acme-widgets" | Library name |
/// | `NAMESPACE` | "acme-widgets" | Library namespace |
/// | `TYPE_NAME` | "AcmeWidgets" | [`super::identifier::to_type_name`] |
/// | `TEST_NAME` | "acme-widgets.Tests" | Test module name |
/// | `AUTHOR` | "The libforge Authors and Contributors" | `ScaffoldOptions::author` |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a context with the standard variables of `library`.
    pub fn for_library(library: &LibraryDescriptor, author: &str) -> Self {
        Self::empty()
            .with_variable("NAME", library.name())
            .with_variable("NAMESPACE", library.namespace())
            .with_variable("TYPE_NAME", library.type_name())
            .with_variable("TEST_NAME", library.test_name())
            .with_variable("AUTHOR", author)
    }

    pub fn empty() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Add a variable, consuming self and returning the extended context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is. Values are inserted verbatim and
    /// never re-scanned, so a value containing `{{X}}` is not expanded.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                break;
            };
            let key = &after[..end];
            out.push_str(&rest[..start]);
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => {
                    out.push_str("{{");
                    out.push_str(key);
                    out.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

//! Boilerplate text artifacts written into a new solution.
//!
//! Every artifact is a solution-relative path plus rendered content. The
//! templates are static; all parameters come from a [`RenderContext`].

use super::{
    common::RelativePath,
    library::{LibraryDescriptor, SOURCE_EXTENSION},
    render::RenderContext,
};

/// A file to be written, relative to the solution directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: RelativePath,
    pub content: String,
}

impl Artifact {
    fn new(path: RelativePath, content: String) -> Self {
        Self { path, content }
    }
}

/// Directory names excluded by the generated ignore rules.
pub const IGNORED_DIRS: [&str; 3] = ["obj", "bin", ".vs"];

const LICENSE: &str = r#"The MIT License (MIT)

Copyright (c) {{AUTHOR}}

Permission is hereby granted, free of charge, to any person obtaining a copy of
this software and associated documentation files (the "Software"), to deal in
the Software without restriction, including without limitation the rights to
use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE."#;

const README: &str = "# {{NAME}}

{{NAME}} library.

Usage:
```
dotnet add package {{NAME}}
```
";

const VERSION_CONFIG: &str = "mode: ContinuousDeployment";

const DEFAULT_CLASS: &str = "

namespace {{NAMESPACE}}
{
    /// <summary>
    /// {{TYPE_NAME}}
    /// </summary>
    public class {{TYPE_NAME}}
    {
    }
}
";

const INTERNALS_VISIBLE_TO: &str =
    "[assembly: System.Runtime.CompilerServices.InternalsVisibleTo(\"{{TEST_NAME}}\")]";

const TEST_STUB: &str = "using NUnit.Framework;

namespace {{NAMESPACE}}
{
    /// <summary>
    /// Tests for {{SOURCE_PATH}}
    /// </summary>
    [TestFixture]
    public class {{CLASS_NAME}}
    {
        [Test]
        public void Test()
        {
            Assert.Fail();
        }
    }
}
";

/// `LICENSE` at the solution root.
pub fn license(ctx: &RenderContext) -> Artifact {
    Artifact::new(RelativePath::from_segments(["LICENSE"]), ctx.render(LICENSE))
}

/// `Readme.md` at the solution root.
pub fn readme(ctx: &RenderContext) -> Artifact {
    Artifact::new(RelativePath::from_segments(["Readme.md"]), ctx.render(README))
}

/// `.gitignore` inside one module directory (`module_dir` is its name).
pub fn ignore_rules(module_dir: &str) -> Artifact {
    let content: String = IGNORED_DIRS.iter().map(|d| format!("/{d}\n")).collect();
    Artifact::new(RelativePath::from_segments([module_dir, ".gitignore"]), content)
}

/// `GitVersion.yml` at the solution root.
pub fn version_config() -> Artifact {
    Artifact::new(
        RelativePath::from_segments(["GitVersion.yml"]),
        VERSION_CONFIG.to_string(),
    )
}

/// `<TypeName>.cs` in the library directory.
pub fn default_class(library: &LibraryDescriptor, ctx: &RenderContext) -> Artifact {
    let file_name = format!("{}.{SOURCE_EXTENSION}", library.type_name());
    Artifact::new(
        RelativePath::from_segments([library.name(), file_name.as_str()]),
        ctx.render(DEFAULT_CLASS),
    )
}

/// `InternalsVisibleToTest.cs` in the library directory.
pub fn internals_visible_to_tests(library: &LibraryDescriptor, ctx: &RenderContext) -> Artifact {
    Artifact::new(
        RelativePath::from_segments([library.name(), "InternalsVisibleToTest.cs"]),
        ctx.render(INTERNALS_VISIBLE_TO),
    )
}

/// Content of a failing test stub for `source`.
pub fn test_stub(namespace: &str, class_name: &str, source: &RelativePath) -> String {
    RenderContext::empty()
        .with_variable("NAMESPACE", namespace)
        .with_variable("CLASS_NAME", class_name)
        .with_variable("SOURCE_PATH", source.to_string())
        .render(TEST_STUB)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widgets() -> (LibraryDescriptor, RenderContext) {
        let lib = LibraryDescriptor::new("Widgets", "/work").unwrap();
        let ctx = RenderContext::for_library(&lib, "The Widgets Authors");
        (lib, ctx)
    }

    #[test]
    fn license_names_author() {
        let (_, ctx) = widgets();
        let a = license(&ctx);
        assert_eq!(a.path.to_string(), "LICENSE");
        assert!(a.content.starts_with("The MIT License (MIT)"));
        assert!(a.content.contains("Copyright (c) The Widgets Authors"));
        assert!(a.content.contains("\"AS IS\""));
    }

    #[test]
    fn readme_mentions_install_command() {
        let (_, ctx) = widgets();
        let a = readme(&ctx);
        assert_eq!(a.path.to_string(), "Readme.md");
        assert!(a.content.starts_with("# Widgets\n"));
        assert!(a.content.contains("dotnet add package Widgets"));
    }

    #[test]
    fn ignore_rules_cover_build_output() {
        let a = ignore_rules("Widgets.Tests");
        assert_eq!(a.path.to_string(), "Widgets.Tests/.gitignore");
        assert_eq!(a.content, "/obj\n/bin\n/.vs\n");
    }

    #[test]
    fn version_config_selects_continuous_deployment() {
        let a = version_config();
        assert_eq!(a.path.to_string(), "GitVersion.yml");
        assert_eq!(a.content, "mode: ContinuousDeployment");
    }

    #[test]
    fn default_class_uses_type_name() {
        let lib = LibraryDescriptor::new("acme-widgets", "/w").unwrap();
        let ctx = RenderContext::for_library(&lib, "x");
        let a = default_class(&lib, &ctx);
        assert_eq!(a.path.to_string(), "acme-widgets/AcmeWidgets.cs");
        assert!(a.content.starts_with("\n\nnamespace acme-widgets\n{"));
        assert!(a.content.contains("public class AcmeWidgets"));
    }

    #[test]
    fn internals_visible_to_names_test_module() {
        let (lib, ctx) = widgets();
        let a = internals_visible_to_tests(&lib, &ctx);
        assert_eq!(a.path.to_string(), "Widgets/InternalsVisibleToTest.cs");
        assert_eq!(
            a.content,
            "[assembly: System.Runtime.CompilerServices.InternalsVisibleTo(\"Widgets.Tests\")]"
        );
    }

    #[test]
    fn test_stub_always_fails() {
        let source = RelativePath::from_segments(["Widgets", "Sub", "Gear.cs"]);
        let stub = test_stub("Widgets", "Gear", &source);
        assert!(stub.contains("namespace Widgets"));
        assert!(stub.contains("public class Gear"));
        assert!(stub.contains("Tests for Widgets/Sub/Gear.cs"));
        assert_eq!(stub.matches("[Test]").count(), 1);
        assert!(stub.contains("Assert.Fail();"));
    }
}

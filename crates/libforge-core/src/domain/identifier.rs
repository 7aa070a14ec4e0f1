//! Identifier casing for generated type names.
//!
//! A library name such as `acme-widgets` must become a legal class name
//! (`AcmeWidgets`) for the generated default class. The conversion splits on
//! every non-word character and capitalises the first character of each
//! fragment. The tail of a fragment is kept verbatim: `my-XMLThing` becomes
//! `MyXMLThing`, not `MyXmlthing`.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single non-word character (Unicode aware, like `\W` in .NET).
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("static pattern is valid"));

/// Convert arbitrary text to a type name.
///
/// | Input | Output |
/// |-------|--------|
/// | `"foo bar"` | `"FooBar"` |
/// | `"my-cool_lib 2"` | `"MyCool_lib2"` |
/// | `"Acme.Widgets"` | `"AcmeWidgets"` |
/// | `""` | `""` |
pub fn to_type_name(text: &str) -> String {
    NON_WORD.split(text).map(capitalize_first).collect()
}

/// Uppercase the first character of `fragment`, leaving the rest untouched.
pub fn capitalize_first(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

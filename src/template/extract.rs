//! Placeholder extraction.
//!
//! Scans template text for `{name}` placeholders and turns each distinct name
//! into a [`TemplateField`]. Matching is non-greedy and single-level: a
//! placeholder runs from a `{` to the next `}`, whatever lies between.

use super::ids::{IdGenerator, IdKind, RandomIds};
use super::model::TemplateField;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Hint prefix used when none is configured: `{name}` gets "Enter name".
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "Enter";

/// `{` then anything except `}` then `}`.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]*)\}").expect("Invalid placeholder regex"));

/// Distinct trimmed placeholder names, in order of first appearance.
///
/// # Examples
///
/// ```
/// use msgtpl::template::extract_field_names;
///
/// let names = extract_field_names("Hello {name}, order {order} for { name }.");
/// assert_eq!(names, vec!["name", "order"]);
/// ```
pub fn extract_field_names(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for caps in PLACEHOLDER_REGEX.captures_iter(content) {
        let name = caps[1].trim();
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    names
}

/// Extract fields using random ids and the default hint prefix.
pub fn extract_fields(content: &str) -> Vec<TemplateField> {
    extract_fields_with(content, &RandomIds, DEFAULT_PLACEHOLDER_PREFIX)
}

/// Extract fields, drawing ids from `ids` and building hints as
/// `"{placeholder_prefix} {name}"`.
///
/// An empty or whitespace-only placeholder (`{}`, `{  }`) yields a field with
/// an empty name; its hint is just the prefix.
pub fn extract_fields_with<G: IdGenerator + ?Sized>(
    content: &str,
    ids: &G,
    placeholder_prefix: &str,
) -> Vec<TemplateField> {
    extract_field_names(content)
        .into_iter()
        .map(|name| TemplateField {
            id: ids.next_id(IdKind::Field),
            placeholder: placeholder_hint(placeholder_prefix, &name),
            name,
            value: String::new(),
            extra: Default::default(),
        })
        .collect()
}

fn placeholder_hint(prefix: &str, name: &str) -> String {
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{} {}", prefix, name),
    }
}

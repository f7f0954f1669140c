//! Message generation: substituting field values into template content.
//!
//! Only exact tokens are replaced: `{name}` with no surrounding whitespace,
//! matched case-sensitively. A field with an empty value leaves its token in
//! place, so anything unresolved stays visibly bracketed in the output.

use super::model::TemplateField;
use std::collections::HashMap;

/// Anything that can bind a placeholder name to a value.
pub trait FieldBinding {
    fn name(&self) -> &str;
    fn value(&self) -> &str;

    /// Whether the binding carries a non-blank value.
    fn is_filled(&self) -> bool {
        !self.value().trim().is_empty()
    }
}

impl FieldBinding for TemplateField {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FieldBinding for (N, V) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn value(&self) -> &str {
        self.1.as_ref()
    }
}

/// Render `content` by replacing every `{name}` token with its field value.
///
/// The content is scanned once, so text coming from a value is never
/// substituted again. When several bindings share a name, the first one
/// with a non-empty value is used.
///
/// # Examples
///
/// ```
/// use msgtpl::template::generate_message;
///
/// let content = "Hello {name}, your order {order} is ready.";
///
/// let out = generate_message(content, &[("name", "Alice"), ("order", "#123")]);
/// assert_eq!(out, "Hello Alice, your order #123 is ready.");
///
/// let out = generate_message(content, &[("name", "Alice"), ("order", "")]);
/// assert_eq!(out, "Hello Alice, your order {order} is ready.");
/// ```
pub fn generate_message<B: FieldBinding>(content: &str, fields: &[B]) -> String {
    let mut bindings: HashMap<&str, &str> = HashMap::new();
    for field in fields {
        if !field.value().is_empty() {
            bindings.entry(field.name()).or_insert(field.value());
        }
    }

    if bindings.is_empty() {
        return content.to_string();
    }

    // Longest token first so a token that is a prefix of another never
    // shadows it at the same position.
    let mut tokens: Vec<(String, &str)> = bindings
        .into_iter()
        .map(|(name, value)| (format!("{{{}}}", name), value))
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(pos) = rest.find('{') {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        match tokens.iter().find(|(token, _)| tail.starts_with(token.as_str())) {
            Some((token, value)) => {
                result.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                result.push('{');
                rest = &tail[1..];
            }
        }
    }
    result.push_str(rest);

    result
}

/// Names of fields whose value is empty or only whitespace, in order.
pub fn unfilled_fields<B: FieldBinding>(fields: &[B]) -> Vec<&str> {
    fields
        .iter()
        .filter(|f| !f.is_filled())
        .map(|f| f.name())
        .collect()
}

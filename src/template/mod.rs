//! Message templates and the placeholder engine.
//!
//! This module provides:
//!
//! - **Model**: `MessageTemplate` and `TemplateField`, the persisted records
//! - **Extract**: scanning template text for `{name}` placeholders
//! - **Generate**: substituting field values back into the text
//! - **Ids**: injectable id generation for templates and fields
//!
//! # Placeholder Syntax
//!
//! A placeholder is a `{` followed by any text up to the next `}`:
//!
//! ```text
//! Hello {customer_name}, your order {order} ships on {date}.
//! ```
//!
//! The name is the trimmed text between the braces. There is no escaping and
//! no nesting: `{a{b}c}` is the placeholder `a{b` followed by the literal `c}`.

mod extract;
mod generate;
mod ids;
mod model;

pub use extract::{
    DEFAULT_PLACEHOLDER_PREFIX, extract_field_names, extract_fields, extract_fields_with,
};
pub use generate::{FieldBinding, generate_message, unfilled_fields};
pub use ids::{IdGenerator, IdKind, RandomIds, SequentialIds};
pub use model::{MessageTemplate, TemplateField};

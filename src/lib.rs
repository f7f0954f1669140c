//! msgtpl: reusable message templates with fillable `{placeholder}` fields.
//!
//! The heart of the crate is the [`template`] module: extracting the fields a
//! piece of text refers to, and substituting values back in. Around it sit a
//! pluggable template [`store`], YAML [`config`], and the CLI layer.
//!
//! ```
//! use msgtpl::template::{extract_fields, generate_message};
//!
//! let content = "Hello {name}, your order {order} is ready.";
//! let fields: Vec<_> = extract_fields(content)
//!     .into_iter()
//!     .map(|f| if f.name == "name" { f.with_value("Alice") } else { f })
//!     .collect();
//!
//! assert_eq!(generate_message(content, &fields), "Hello Alice, your order {order} is ready.");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod store;
pub mod template;

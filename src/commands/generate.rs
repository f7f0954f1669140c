//! Implementation of the `msgtpl generate` command.

use crate::cli::GenerateArgs;
use crate::context::AppContext;
use crate::error::{MsgtplError, Result};
use crate::fs::atomic_write_file;
use crate::store::TemplateRepository;
use crate::template::{MessageTemplate, TemplateField, generate_message, unfilled_fields};
use std::path::Path;
use tracing::info;

/// Execute the `msgtpl generate` command.
///
/// Strict mode comes from `--strict` or the `require_all_fields` config key.
pub fn cmd_generate(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    let strict = args.strict || ctx.config.require_all_fields;
    let message = generate_from_store(&ctx.repository(), &args.id, &args.set, strict)?;

    match &args.output {
        Some(path) => {
            write_output(path, &message)?;
            println!("Wrote message to {}", path.display());
        }
        None => println!("{}", message),
    }

    Ok(())
}

/// Write a rendered message to a user-chosen file.
///
/// The destination is an argument, not the template store, so a failure here
/// is reported as a user error.
pub(crate) fn write_output(path: &Path, message: &str) -> Result<()> {
    atomic_write_file(path, message).map_err(|e| {
        let reason = match e {
            MsgtplError::StorageError(reason) => reason,
            other => other.to_string(),
        };
        MsgtplError::UserError(format!("could not write output file: {}", reason))
    })
}

/// Look up a template, fill in `bindings`, and render it.
pub(crate) fn generate_from_store<R: TemplateRepository + ?Sized>(
    repo: &R,
    id: &str,
    bindings: &[(String, String)],
    strict: bool,
) -> Result<String> {
    let template = repo
        .find(id)?
        .ok_or_else(|| MsgtplError::NotFound(id.to_string()))?;

    let fields = fill_fields(&template, bindings)?;

    let missing = unfilled_fields(&fields);
    if !missing.is_empty() {
        if strict {
            return Err(MsgtplError::UserError(format!(
                "unfilled fields: {} (set them with --set NAME=VALUE)",
                missing.join(", ")
            )));
        }
        info!(id = %id, missing = %missing.join(", "), "generating with unfilled fields");
    }

    Ok(generate_message(&template.content, &fields))
}

/// Fresh copies of the template's fields carrying the given values.
///
/// A binding for a name the template does not have is a user error, so a typo
/// never silently leaves a placeholder unfilled. Later bindings for the same
/// name win.
pub(crate) fn fill_fields(
    template: &MessageTemplate,
    bindings: &[(String, String)],
) -> Result<Vec<TemplateField>> {
    let mut fields = template.blank_fields();

    for (name, value) in bindings {
        match fields.iter_mut().find(|f| &f.name == name) {
            Some(field) => field.value = value.clone(),
            None => {
                return Err(MsgtplError::UserError(format!(
                    "template '{}' has no field named '{}' (fields: {})",
                    template.id,
                    name,
                    template.field_names().join(", ")
                )));
            }
        }
    }

    Ok(fields)
}

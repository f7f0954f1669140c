//! Implementation of the `msgtpl delete` command.

use crate::cli::DeleteArgs;
use crate::context::AppContext;
use crate::error::{MsgtplError, Result};
use crate::store::TemplateRepository;
use tracing::info;

/// Execute the `msgtpl delete` command.
pub fn cmd_delete(ctx: &AppContext, args: DeleteArgs) -> Result<()> {
    delete_template(&ctx.repository(), &args.id)?;
    println!("Deleted template: {}", args.id);
    Ok(())
}

/// Remove a template; an unknown id is reported as not found.
pub(crate) fn delete_template<R: TemplateRepository + ?Sized>(repo: &R, id: &str) -> Result<()> {
    if !repo.delete(id)? {
        return Err(MsgtplError::NotFound(id.to_string()));
    }

    info!(id = %id, "deleted template");
    Ok(())
}

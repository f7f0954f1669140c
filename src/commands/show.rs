//! Implementation of the `msgtpl show` command.

use super::display::render_details;
use crate::cli::ShowArgs;
use crate::context::AppContext;
use crate::error::{MsgtplError, Result};
use crate::store::TemplateRepository;
use chrono::Local;

/// Execute the `msgtpl show` command.
pub fn cmd_show(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    let template = ctx
        .repository()
        .find(&args.id)?
        .ok_or_else(|| MsgtplError::NotFound(args.id.clone()))?;

    print!("{}", render_details(&template, &Local));
    Ok(())
}

//! Implementation of the `msgtpl list` command.

use super::display::render_card;
use crate::context::AppContext;
use crate::error::Result;
use crate::store::TemplateRepository;
use chrono::Local;

/// Execute the `msgtpl list` command.
///
/// An unreadable store lists as empty; the failure is logged.
pub fn cmd_list(ctx: &AppContext) -> Result<()> {
    let templates = ctx.repository().load();

    if templates.is_empty() {
        println!("No templates yet.");
        println!();
        println!("Create one with `msgtpl create <name> --content \"Hello {{name}}\"`");
        return Ok(());
    }

    let now = Local::now();
    for (i, template) in templates.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", render_card(template, ctx.config.preview_length, &now));
    }

    Ok(())
}

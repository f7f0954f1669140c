//! Implementation of the `msgtpl create` command.

use super::read_content;
use crate::cli::CreateArgs;
use crate::config::Config;
use crate::context::AppContext;
use crate::error::Result;
use crate::store::TemplateRepository;
use crate::template::{IdGenerator, MessageTemplate, RandomIds};
use chrono::{DateTime, Utc};
use tracing::info;

/// Execute the `msgtpl create` command.
///
/// Extracts the fields from the content, appends the new template to the
/// store, and prints its id and fields.
pub fn cmd_create(ctx: &AppContext, args: CreateArgs) -> Result<()> {
    let content = read_content(&args.source)?;
    let repo = ctx.repository();

    let template = create_template(&repo, &RandomIds, &ctx.config, &args.name, &content, Utc::now())?;

    println!("Created template: {}", template.id);
    println!();
    println!("  Name:   {}", template.name);
    if template.fields.is_empty() {
        println!("  Fields: (none)");
    } else {
        println!("  Fields: {}", template.field_names().join(", "));
    }
    println!();
    println!("Fill it in with `msgtpl generate {}`", template.id);

    Ok(())
}

/// Build a template from user input and persist it.
pub(crate) fn create_template<R, G>(
    repo: &R,
    ids: &G,
    config: &Config,
    name: &str,
    content: &str,
    now: DateTime<Utc>,
) -> Result<MessageTemplate>
where
    R: TemplateRepository + ?Sized,
    G: IdGenerator + ?Sized,
{
    let template = MessageTemplate::create(name, content, ids, &config.placeholder_prefix, now)?;
    repo.insert(template.clone())?;

    info!(id = %template.id, fields = template.fields.len(), "created template");
    Ok(template)
}

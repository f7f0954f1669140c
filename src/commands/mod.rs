//! Command implementations for msgtpl.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus input helpers shared between commands.

mod create;
mod delete;
mod display;
mod fields;
mod generate;
mod list;
mod show;


use crate::cli::{Cli, Command, ContentSource};
use crate::context::AppContext;
use crate::error::{MsgtplError, Result};
use std::io::Read;

/// Dispatch a command to its implementation.
///
/// The data directory is only resolved for commands that use it, so a
/// broken config never blocks `fields`.
pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli { home, command, .. } = cli;
    let resolve = || AppContext::resolve(home.as_deref());

    match command {
        Command::Create(args) => create::cmd_create(&resolve()?, args),
        Command::List => list::cmd_list(&resolve()?),
        Command::Show(args) => show::cmd_show(&resolve()?, args),
        Command::Fields(args) => fields::cmd_fields(args),
        Command::Generate(args) => generate::cmd_generate(&resolve()?, args),
        Command::Delete(args) => delete::cmd_delete(&resolve()?, args),
    }
}

/// Read template content from `--content`, `--file PATH`, or `--file -`.
fn read_content(source: &ContentSource) -> Result<String> {
    if let Some(content) = &source.content {
        return Ok(content.clone());
    }

    match &source.file {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| MsgtplError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            MsgtplError::UserError(format!(
                "failed to read content file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => Err(MsgtplError::UserError(
            "either --content or --file is required".to_string(),
        )),
    }
}

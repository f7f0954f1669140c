//! CLI argument parsing for msgtpl.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// msgtpl: reusable message templates with fillable placeholders.
///
/// Write a template once with `{placeholders}` in it, then fill in the
/// blanks whenever you need the message.
#[derive(Parser, Debug)]
#[command(name = "msgtpl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (default: $MSGTPL_HOME, then the platform data dir).
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for msgtpl.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create and save a new template.
    ///
    /// Placeholders are extracted from the content and stored with it.
    Create(CreateArgs),

    /// List saved templates.
    #[command(alias = "ls")]
    List,

    /// Show a template's full content and fields.
    Show(ShowArgs),

    /// Print the placeholders found in some content, without saving anything.
    Fields(FieldsArgs),

    /// Fill in a template and print the resulting message.
    ///
    /// Placeholders without a value are left in place as `{name}`.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Delete a saved template.
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

/// Where template content comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ContentSource {
    /// Template content given inline.
    #[arg(long)]
    pub content: Option<String>,

    /// Read template content from a file (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `create` command.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name for the new template.
    pub name: String,

    #[command(flatten)]
    pub source: ContentSource,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Template id.
    pub id: String,
}

/// Arguments for the `fields` command.
#[derive(Parser, Debug)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub source: ContentSource,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Template id.
    pub id: String,

    /// Field value, repeatable.
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub set: Vec<(String, String)>,

    /// Fail instead of printing when any field is left unfilled.
    #[arg(long)]
    pub strict: bool,

    /// Write the message to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `delete` command.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Template id.
    pub id: String,
}

/// Parse `name=value`. The name is trimmed; the value is kept verbatim.
fn parse_binding(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) => Ok((name.trim().to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["msgtpl", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert_eq!(cli.verbose, 0);
        assert!(cli.home.is_none());
    }

    #[test]
    fn parse_create_inline() {
        let cli = Cli::try_parse_from(["msgtpl", "create", "Greeting", "--content", "Hi {name}"])
            .unwrap();
        if let Command::Create(args) = cli.command {
            assert_eq!(args.name, "Greeting");
            assert_eq!(args.source.content.as_deref(), Some("Hi {name}"));
            assert!(args.source.file.is_none());
        } else {
            panic!("Expected Create command");
        }
    }

    #[test]
    fn parse_create_requires_one_source() {
        assert!(Cli::try_parse_from(["msgtpl", "create", "Greeting"]).is_err());
        assert!(
            Cli::try_parse_from([
                "msgtpl", "create", "Greeting", "--content", "x", "--file", "y.txt"
            ])
            .is_err()
        );
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "msgtpl",
            "--home",
            "/tmp/msgtpl",
            "-vv",
            "generate",
            "template_1",
            "--set",
            "name=Alice",
            "-s",
            " order =#1=2",
            "--strict",
            "-o",
            "out.txt",
        ])
        .unwrap();

        assert_eq!(cli.home, Some(PathBuf::from("/tmp/msgtpl")));
        assert_eq!(cli.verbose, 2);
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.id, "template_1");
            assert_eq!(
                args.set,
                vec![
                    ("name".to_string(), "Alice".to_string()),
                    ("order".to_string(), "#1=2".to_string())
                ]
            );
            assert!(args.strict);
            assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_rejects_binding_without_equals() {
        let result = Cli::try_parse_from(["msgtpl", "generate", "template_1", "--set", "name"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["msgtpl", "delete", "template_1", "--home", "/x", "-v"])
            .unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/x")));
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Command::Delete(_)));
    }

    #[test]
    fn parse_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["msgtpl", "ls"]).unwrap().command,
            Command::List
        ));
        assert!(matches!(
            Cli::try_parse_from(["msgtpl", "rm", "t"]).unwrap().command,
            Command::Delete(_)
        ));
        assert!(matches!(
            Cli::try_parse_from(["msgtpl", "gen", "t"]).unwrap().command,
            Command::Generate(_)
        ));
    }

    #[test]
    fn binding_parser_splits_on_first_equals() {
        assert_eq!(
            parse_binding("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert_eq!(parse_binding("a=").unwrap(), ("a".to_string(), String::new()));
        assert!(parse_binding("novalue").is_err());
    }
}

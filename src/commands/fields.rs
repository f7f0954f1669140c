//! Implementation of the `msgtpl fields` command.

use super::read_content;
use crate::cli::FieldsArgs;
use crate::error::Result;
use crate::template::extract_field_names;

/// Execute the `msgtpl fields` command: print each distinct placeholder.
pub fn cmd_fields(args: FieldsArgs) -> Result<()> {
    let content = read_content(&args.source)?;
    let names = extract_field_names(&content);

    if names.is_empty() {
        println!("No placeholders found.");
        return Ok(());
    }

    for name in &names {
        println!("{}", display_name(name));
    }

    Ok(())
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(empty)" } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_marks_empty() {
        assert_eq!(display_name("order"), "order");
        assert_eq!(display_name(""), "(empty)");
    }
}

//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod codebook;
mod hide;
mod retrieve;

pub use codebook::CodebookCommand;
pub use hide::HideCommand;
pub use retrieve::RetrieveCommand;

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Resolves text given inline, from a file, or from stdin, in that order.
fn read_text(inline: Option<&str>, file: Option<&Path>, what: &str) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {} from {}", what, path.display()));
    }

    info!("Reading {} from stdin (Ctrl+D to finish)", what);
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .with_context(|| format!("Failed to read {} from stdin", what))?;
    Ok(buffer)
}

/// Drops one trailing line break left by shells and editors.
fn trim_line_end(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_line_end() {
        assert_eq!(trim_line_end("secret\n"), "secret");
        assert_eq!(trim_line_end("secret\r\n"), "secret");
        assert_eq!(trim_line_end("secret"), "secret");
        assert_eq!(trim_line_end("two\n\n"), "two\n");
    }

    #[test]
    fn test_read_text_prefers_inline() {
        let text = read_text(Some("inline"), Some(Path::new("/does/not/exist")), "carrier").unwrap();
        assert_eq!(text, "inline");
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = read_text(None, Some(Path::new("/does/not/exist")), "carrier").unwrap_err();
        assert!(err.to_string().contains("Failed to read carrier"));
    }
}

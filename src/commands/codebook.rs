//! Codebook command - print the ASCII to codeword table.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use zwhide::codebook::entries;

use super::CommandExecutor;

/// Print the mapping between printable ASCII and zero-width codewords.
#[derive(Args, Debug)]
pub struct CodebookCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Entry {
    character: char,
    code: u32,
    codepoints: Vec<String>,
}

impl CommandExecutor for CodebookCommand {
    fn execute(&self) -> Result<()> {
        let table: Vec<Entry> = entries()
            .map(|(character, codeword)| Entry {
                character,
                code: character as u32,
                codepoints: codeword.iter().map(|&m| codepoint(m)).collect(),
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&table).context("Failed to serialize codebook")?;
            println!("{}", json);
            return Ok(());
        }

        for entry in &table {
            println!("{:?} (0x{:02x}) -> {}", entry.character, entry.code, entry.codepoints.join(" "));
        }

        Ok(())
    }
}

fn codepoint(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

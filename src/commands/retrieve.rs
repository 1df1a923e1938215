//! Retrieve command - extract a hidden message from carrier text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use zwhide::retrieve;

use super::{read_text, CommandExecutor};

/// Extract a message hidden with `zwhide hide`.
///
/// Reads the carrier inline, from a file, or from stdin when neither is given.
#[derive(Args, Debug)]
pub struct RetrieveCommand {
    /// Carrier text (mutually exclusive with --carrier-file)
    #[arg(short, long, conflicts_with = "carrier_file")]
    pub carrier: Option<String>,

    /// Read the carrier from a file (mutually exclusive with --carrier)
    #[arg(long, conflicts_with = "carrier")]
    pub carrier_file: Option<PathBuf>,
}

impl CommandExecutor for RetrieveCommand {
    fn execute(&self) -> Result<()> {
        let carrier = read_text(self.carrier.as_deref(), self.carrier_file.as_deref(), "carrier")?;

        let message = retrieve(&carrier).context("Failed to retrieve hidden message")?;
        println!("{}", message);

        Ok(())
    }
}

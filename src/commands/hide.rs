//! Hide command - embed a secret message in carrier text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};

use zwhide::{capacity_cost, hide_with_config, HideConfig, InsertPosition};

use super::{read_text, trim_line_end, CommandExecutor};

/// Hide a printable-ASCII secret inside carrier text.
///
/// The carrier can be given inline or as a file. When --secret is omitted
/// the secret is read from stdin.
#[derive(Args, Debug)]
pub struct HideCommand {
    /// Secret message (printable ASCII only)
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Carrier text (mutually exclusive with --carrier-file)
    #[arg(short, long, conflicts_with = "carrier_file", required_unless_present = "carrier_file")]
    pub carrier: Option<String>,

    /// Read the carrier from a file (mutually exclusive with --carrier)
    #[arg(long, conflicts_with = "carrier")]
    pub carrier_file: Option<PathBuf>,

    /// Where the invisible characters go in the carrier
    #[arg(short, long, value_enum, default_value_t = InsertPosition::Middle)]
    pub position: InsertPosition,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for HideCommand {
    fn execute(&self) -> Result<()> {
        let secret = read_text(self.secret.as_deref(), None, "secret")?;
        let secret = trim_line_end(&secret);

        let carrier = read_text(self.carrier.as_deref(), self.carrier_file.as_deref(), "carrier")?;

        debug!(
            "Inserting {} markers into {} carrier characters ({:?})",
            capacity_cost(secret),
            carrier.chars().count(),
            self.position
        );

        let config = HideConfig::at(self.position);
        let hidden = hide_with_config(secret, &carrier, &config).context("Failed to hide secret")?;

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, &hidden)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            info!("Carrier with hidden message written to: {}", output_path.display());
        } else {
            println!("{}", hidden);
        }

        Ok(())
    }
}

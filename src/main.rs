//! zwhide - Hide messages in zero-width characters
//!
//! A thin CLI over the zwhide library: `hide`, `retrieve`, and `codebook`.
//! The payload goes to stdout, logs to stderr.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{error, LevelFilter};

use commands::{CodebookCommand, CommandExecutor, HideCommand, RetrieveCommand};

/// zwhide - Hide messages in zero-width characters
///
/// Invisible Unicode characters encode each ASCII character of the secret;
/// the carrier looks unchanged when rendered.
#[derive(Parser)]
#[command(name = "zwhide")]
#[command(version = zwhide::VERSION)]
#[command(about = "Hide ASCII messages in text using zero-width characters")]
#[command(long_about = None)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a secret message in a carrier
    Hide(HideCommand),

    /// Retrieve a hidden message from a carrier
    Retrieve(RetrieveCommand),

    /// Print the ASCII to zero-width codeword table
    Codebook(CodebookCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Hide(cmd) => cmd,
            Commands::Retrieve(cmd) => cmd,
            Commands::Codebook(cmd) => cmd,
        }
    }
}

/// Initialize logging to stderr; `--verbose` raises the level to debug.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::new()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(level)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command.executor().execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

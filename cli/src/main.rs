//! Bytepair CLI - Command-line interface for the BPE tokenizer.
//!
//! This is the main entry point for the `bytepair` command-line tool.

mod commands;
mod input;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, TrainCommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "bytepair")]
#[command(about = "A byte-level BPE tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a new tokenizer from files or stdin
    Train(TrainCommand),
    /// Tokenize files or stdin with a trained model
    Encode(EncodeCommand),
    /// Convert a JSON array of token IDs back to bytes
    Decode(DecodeCommand),
}

impl Commands {
    /// Default log filter; training progress is logged at `info`.
    fn log_filter(&self) -> &'static str {
        match self {
            Commands::Train(cmd) if cmd.verbose => "info",
            _ => "warn",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(cli.command.log_filter()))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
    }

    Ok(())
}

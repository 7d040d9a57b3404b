//! Decode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Decode command arguments.
#[derive(Parser, Debug)]
pub struct DecodeCommand {
    /// Path to the trained model (.model file)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Files holding a JSON array of token IDs (stdin if none)
    pub inputs: Vec<PathBuf>,
}

use crate::input::read_inputs;
use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::{TokenId, Tokenizer};
use std::io::Write;

/// Parse a JSON array of token IDs.
pub fn parse_tokens(data: &[u8]) -> AnyhowResult<Vec<TokenId>> {
    serde_json::from_slice(data).context("Can't decode tokens")
}

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer = Tokenizer::load(&cmd.model)?;

    // Parse token IDs
    let data = read_inputs(&cmd.inputs)?;
    let ids = parse_tokens(&data)?;

    // Decode
    let bytes = tokenizer.decode(&ids)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&bytes)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

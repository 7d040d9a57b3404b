//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Encode command arguments.
#[derive(Parser, Debug)]
pub struct EncodeCommand {
    /// Path to the trained model (.model file)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Files to encode, concatenated in order (stdin if none)
    pub inputs: Vec<PathBuf>,
}

use crate::input::read_inputs;
use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::{TokenId, Tokenizer};
use log::info;

/// Render token IDs as a JSON array.
pub fn render_tokens(ids: &[TokenId]) -> AnyhowResult<String> {
    serde_json::to_string(ids).context("Failed to serialize tokens")
}

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer = Tokenizer::load(&cmd.model)?;

    // Read input (from stdin if no files given)
    let data = read_inputs(&cmd.inputs)?;

    // Encode
    let ids = tokenizer.encode(&data);
    info!("Encoded {} bytes into {} tokens", data.len(), ids.len());

    println!("{}", render_tokens(&ids)?);

    Ok(())
}

//! Train command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Train command arguments.
#[derive(Parser, Debug)]
pub struct TrainCommand {
    /// Files to read training data from, concatenated in order (stdin if none)
    pub inputs: Vec<PathBuf>,

    /// Name of the model and vocab files
    #[arg(short, long, default_value = "tokenizer")]
    pub output: String,

    /// Directory the model files are written to
    #[arg(short = 'd', long, default_value = "models")]
    pub models_dir: PathBuf,

    /// Target vocabulary size
    #[arg(short = 's', long, default_value_t = 512, value_parser = parse_vocab_size)]
    pub vocab_size: usize,

    /// Show training progress
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

use crate::input::read_inputs;
use anyhow::{Context, Result as AnyhowResult};
use bytepair_tokenizer::{Tokenizer, BASE_VOCAB_SIZE, MAX_VOCAB_SIZE};
use log::info;
use std::time::Instant;

/// Parse a vocabulary size, keeping it within `[BASE_VOCAB_SIZE, MAX_VOCAB_SIZE)`.
fn parse_vocab_size(value: &str) -> Result<usize, String> {
    let range_error = || {
        format!(
            "vocab size should be within the range [{}, {})",
            BASE_VOCAB_SIZE, MAX_VOCAB_SIZE
        )
    };

    let size: usize = value.parse().map_err(|_| range_error())?;
    if !(BASE_VOCAB_SIZE..MAX_VOCAB_SIZE).contains(&size) {
        return Err(range_error());
    }
    Ok(size)
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    info!(
        "Training tokenizer: {} input(s), vocab size {}, output {}/{}",
        cmd.inputs.len(),
        cmd.vocab_size,
        cmd.models_dir.display(),
        cmd.output
    );

    // Read training data
    let data = read_inputs(&cmd.inputs)?;
    info!("Read {} bytes", data.len());

    // Train
    let mut tokenizer = Tokenizer::new();
    let start = Instant::now();
    tokenizer
        .train(&data, cmd.vocab_size, cmd.verbose)
        .context("Training failed")?;

    if cmd.verbose {
        let elapsed = start.elapsed();
        let iterations = tokenizer.merges().len().max(1);
        println!("Elapsed time: {:.2?}", elapsed);
        println!(
            "Average time per iteration: {:.4}s",
            elapsed.as_secs_f64() / iterations as f64
        );
    }

    // Save model
    let paths = tokenizer
        .save(&cmd.models_dir, &cmd.output)
        .context("Failed to save model")?;
    println!("Model saved: {}", paths.model.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocab_size() {
        assert_eq!(parse_vocab_size("256"), Ok(256));
        assert_eq!(parse_vocab_size("1024"), Ok(1024));
        assert!(parse_vocab_size("255").is_err());
        assert!(parse_vocab_size("-1").is_err());
        assert!(parse_vocab_size("many").is_err());
        assert!(parse_vocab_size(&MAX_VOCAB_SIZE.to_string()).is_err());
    }

    #[test]
    fn test_run_saves_model() {
        let temp_dir = tempfile::tempdir().unwrap();
        let corpus = temp_dir.path().join("corpus.txt");
        std::fs::write(&corpus, b"low lower lowest newer newest").unwrap();

        let models_dir = temp_dir.path().join("models");
        run(TrainCommand {
            inputs: vec![corpus],
            output: "tiny".to_string(),
            models_dir: models_dir.clone(),
            vocab_size: 266,
            verbose: false,
        })
        .unwrap();

        let tokenizer = Tokenizer::load(&models_dir.join("tiny.model")).unwrap();
        assert_eq!(tokenizer.vocab_size(), 266);
        assert!(models_dir.join("tiny.vocab").is_file());
    }
}

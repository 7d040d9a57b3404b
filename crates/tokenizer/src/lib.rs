//! Bytepair-tokenizer - High-level tokenizer API
//!
//! This crate provides a user-friendly interface for byte-level BPE
//! tokenization, integrating the merge table, vocabulary, trainer, encoder and
//! model files into a single, easy-to-use API.
//!
//! # Features
//!
//! - Training from raw bytes to a target vocabulary size
//! - Rank-ordered encoding that replays merges in learning order
//! - Strict decoding that reports unknown token IDs with their position
//! - Saving and loading as a merge-list file plus a vocabulary dump
//!
//! # Example
//!
//! ```rust,no_run
//! use bytepair_tokenizer::Tokenizer;
//! use std::path::Path;
//!
//! let mut tokenizer = Tokenizer::new();
//! tokenizer.train(b"aaabdaaabac", 258, false)?;
//!
//! // Encode bytes
//! let ids = tokenizer.encode(b"aaabdaaabac");
//! println!("{:?}", ids);
//!
//! // Decode tokens
//! assert_eq!(tokenizer.decode(&ids)?, b"aaabdaaabac");
//!
//! // Persist and reload
//! let paths = tokenizer.save(Path::new("models"), "example")?;
//! let reloaded = Tokenizer::load(&paths.model)?;
//! assert_eq!(reloaded.encode(b"aaab"), tokenizer.encode(b"aaab"));
//! # Ok::<(), bytepair_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bytepair_core::{
    MergeTable, Pair, Result, TokenId, TokenVocabulary, TokenizerError, BASE_VOCAB_SIZE,
    MAX_VOCAB_SIZE,
};
pub use bytepair_training::{MergeEvent, TrainingConfig};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Model, Tokenizer};

// IO/Serialization
pub mod io;
pub use io::{ModelPaths, TokenizerLoader, TokenizerSaver, FORMAT_TAG};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

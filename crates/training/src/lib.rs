//! Bytepair-training - BPE training infrastructure
//!
//! This crate provides the training algorithm for learning BPE merges from
//! raw bytes.
//!
//! # Features
//!
//! - Single-pass pair counting with first-to-reach tie breaking
//! - Exactly `vocab_size - 256` merges per run, degenerate merges included
//! - Per-merge progress reporting through the `log` facade or an observer
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::{BpeTrainer, TrainingConfig};
//!
//! let trainer = BpeTrainer::new(TrainingConfig {
//!     vocab_size: 258,
//!     verbose: false,
//! })?;
//!
//! let (merges, vocab) = trainer.train(b"aaabdaaabac")?;
//! assert_eq!(merges.len(), 2);
//! assert_eq!(vocab.get(256), Some(&b"aa"[..]));
//! # Ok::<(), bytepair_training::TokenizerError>(())
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, MergeEvent, PairCounter, TrainingConfig};

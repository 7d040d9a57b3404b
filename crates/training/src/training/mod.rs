//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the training algorithm and the pair counting it
//! relies on for learning merges from raw bytes.

pub mod counter;
pub mod trainer;

pub use counter::PairCounter;
pub use trainer::{BpeTrainer, MergeEvent, TrainingConfig};

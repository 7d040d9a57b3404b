//! Serialization and deserialization for BPE models.
//!
//! This module provides functionality for saving trained tokenizers as a
//! merge-list file plus a vocabulary dump, and for loading them back.

pub mod format;
pub mod load;
pub mod save;

pub use format::{ModelPaths, FORMAT_TAG, MODEL_EXTENSION, VOCAB_EXTENSION};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;

//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the merge
//! table, the vocabulary, training and persistence together.

use crate::io::{ModelPaths, TokenizerLoader, TokenizerSaver};
use bytepair_core::{
    ByteDecoder, ByteEncoder, MergeTable, Result, TokenId, TokenVocabulary, TokenizerError,
};
use bytepair_training::{BpeTrainer, TrainingConfig};
use rayon::prelude::*;
use std::path::Path;

/// A trained model: the merge table and the vocabulary derived from it.
///
/// The two are always replaced together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// Merge table (canonical)
    pub merges: MergeTable,
    /// Vocabulary (derived)
    pub vocab: TokenVocabulary,
}

impl Model {
    /// Build a model from a merge table, deriving the vocabulary.
    pub fn from_merges(merges: MergeTable) -> Result<Self> {
        let vocab = TokenVocabulary::from_merges(&merges).ok_or_else(|| {
            TokenizerError::InvalidArgument(
                "merge table refers to tokens before they are defined".to_string(),
            )
        })?;
        Ok(Self { merges, vocab })
    }
}

/// Main tokenizer struct.
///
/// A new tokenizer knows only the 256 byte tokens. Training or loading
/// replaces its whole model; encoding and decoding only read it, so a trained
/// tokenizer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    model: Model,
}

impl Tokenizer {
    /// Create a tokenizer with the base vocabulary only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer from an existing model.
    pub fn from_model(model: Model) -> Self {
        Self { model }
    }

    /// Train the tokenizer on raw bytes.
    ///
    /// # Arguments
    /// * `corpus` - Training data
    /// * `vocab_size` - Target vocabulary size, within `[256, MAX_VOCAB_SIZE)`
    /// * `verbose` - Log every learned merge at `info` level
    pub fn train(&mut self, corpus: &[u8], vocab_size: usize, verbose: bool) -> Result<()> {
        self.train_with_config(
            corpus,
            &TrainingConfig {
                vocab_size,
                verbose,
            },
        )
    }

    /// Train the tokenizer with an explicit training configuration.
    ///
    /// The current model is only replaced once training has succeeded.
    pub fn train_with_config(&mut self, corpus: &[u8], config: &TrainingConfig) -> Result<()> {
        let trainer = BpeTrainer::new(config.clone())?;
        let (merges, vocab) = trainer.train(corpus)?;

        self.model = Model { merges, vocab };
        Ok(())
    }

    /// Encode bytes to token IDs.
    pub fn encode(&self, bytes: &[u8]) -> Vec<TokenId> {
        ByteEncoder::new(&self.model.merges).encode(bytes)
    }

    /// Encode a batch of inputs (parallelized).
    pub fn encode_batch<T>(&self, inputs: &[T]) -> Vec<Vec<TokenId>>
    where
        T: AsRef<[u8]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.encode(input.as_ref()))
            .collect()
    }

    /// Decode token IDs back to bytes.
    ///
    /// Fails with [`TokenizerError::UnknownToken`] on the first ID that is not
    /// in the vocabulary.
    pub fn decode(&self, ids: &[TokenId]) -> Result<Vec<u8>> {
        ByteDecoder::new(&self.model.vocab).decode(ids)
    }

    /// Get the vocabulary size, base tokens included.
    pub fn vocab_size(&self) -> usize {
        self.model.vocab.len()
    }

    /// Get a reference to the merge table.
    pub fn merges(&self) -> &MergeTable {
        &self.model.merges
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &TokenVocabulary {
        &self.model.vocab
    }

    /// Get a reference to the whole model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Save the tokenizer as `<dir>/<name>.model` plus `<dir>/<name>.vocab`.
    ///
    /// # Arguments
    /// * `dir` - Directory to save into, created if missing
    /// * `name` - Model name
    pub fn save(&self, dir: &Path, name: &str) -> Result<ModelPaths> {
        TokenizerSaver::new(&self.model.merges, &self.model.vocab).save(dir, name)
    }

    /// Load a tokenizer from a `.model` file.
    ///
    /// # Arguments
    /// * `path` - Path to the merge-list file
    pub fn load(path: &Path) -> Result<Self> {
        let (merges, vocab) = TokenizerLoader::load(path)?;
        Ok(Self::from_model(Model { merges, vocab }))
    }

    /// Replace this tokenizer's model with the one stored at `path`.
    ///
    /// On error the current model is left untouched.
    pub fn reload(&mut self, path: &Path) -> Result<()> {
        *self = Self::load(path)?;
        Ok(())
    }
}

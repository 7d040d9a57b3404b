//! Save functionality for trained tokenizers.
//!
//! This module writes a trained model to disk as a merge-list file plus a
//! vocabulary dump.

use super::format::{base_token_line, merged_token_line, ModelPaths, FORMAT_TAG};
use bytepair_core::{MergeTable, Result, TokenVocabulary, TokenizerError};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    /// Merge table reference
    merges: &'a MergeTable,
    /// Vocabulary reference
    vocab: &'a TokenVocabulary,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(merges: &'a MergeTable, vocab: &'a TokenVocabulary) -> Self {
        Self { merges, vocab }
    }

    /// Save the model as `<dir>/<name>.model` and `<dir>/<name>.vocab`.
    ///
    /// Missing directories are created.
    ///
    /// # Arguments
    /// * `dir` - Directory to save into
    /// * `name` - Model name, used as the file stem
    pub fn save(&self, dir: &Path, name: &str) -> Result<ModelPaths> {
        if name.is_empty() {
            return Err(TokenizerError::InvalidArgument(
                "model name must not be empty".to_string(),
            ));
        }

        let paths = ModelPaths::new(dir, name);
        // The name may carry its own subdirectories.
        if let Some(parent) = paths.model.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TokenizerError::io(parent, e))?;
        }

        Self::write_file(&paths.model, |w| self.write_merges(w))?;
        Self::write_file(&paths.vocab, |w| self.write_vocab(w))?;

        info!(
            "Saved {} merges to {} (vocabulary dump: {})",
            self.merges.len(),
            paths.model.display(),
            paths.vocab.display()
        );

        Ok(paths)
    }

    /// Write the merge list: the format tag, then one `"<left> <right>"` line
    /// per merge in ascending ID order.
    pub fn write_merges<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", FORMAT_TAG)?;
        for (pair, _id) in self.merges.iter() {
            writeln!(writer, "{}", pair)?;
        }
        Ok(())
    }

    /// Write the vocabulary dump, one line per token in ascending ID order.
    pub fn write_vocab<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for (id, bytes) in self.vocab.iter() {
            let line = match self.merges.pair_of(id) {
                Some(pair) => merged_token_line(
                    id,
                    self.vocab.get(pair.left).unwrap_or_default(),
                    self.vocab.get(pair.right).unwrap_or_default(),
                    bytes,
                ),
                None => base_token_line(id, bytes),
            };
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    fn write_file<F>(path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let file = File::create(path).map_err(|e| TokenizerError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        write(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| TokenizerError::io(path, e))
    }
}

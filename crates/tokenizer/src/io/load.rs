//! Load functionality for pre-trained tokenizers.
//!
//! This module reads a merge-list file back into a merge table and rebuilds the
//! vocabulary from it.

use super::format::{check_model_extension, parse_merge_line, FORMAT_TAG};
use bytepair_core::{MergeTable, Result, TokenVocabulary, TokenizerError};
use log::{debug, info};
use std::path::Path;

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a model from a `.model` merge-list file.
    ///
    /// # Arguments
    /// * `path` - Path to the merge-list file
    pub fn load(path: &Path) -> Result<(MergeTable, TokenVocabulary)> {
        check_model_extension(path)?;

        let bytes = std::fs::read(path).map_err(|e| TokenizerError::io(path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let (merges, vocab) = Self::parse(&bytes)?;
        info!("Loaded {} merges from {}", merges.len(), path.display());

        Ok((merges, vocab))
    }

    /// Parse the contents of a merge-list file.
    ///
    /// IDs are assigned from 256 in line order. Each merge may only refer to
    /// IDs defined by earlier lines, and no pair may appear twice; a file that
    /// reorders lines while respecting both rules loads with different merge
    /// priorities and cannot be told apart from a genuine model.
    pub fn parse(bytes: &[u8]) -> Result<(MergeTable, TokenVocabulary)> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            let line = bytes[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1;
            TokenizerError::MalformedModel {
                line,
                reason: "invalid UTF-8".to_string(),
            }
        })?;

        let mut lines = text.lines();

        let header = lines.next().unwrap_or_default();
        if header != FORMAT_TAG {
            return Err(TokenizerError::VersionMismatch {
                expected: FORMAT_TAG.to_string(),
                found: header.to_string(),
            });
        }

        let mut merges = MergeTable::new();
        for (index, line) in lines.enumerate() {
            // Header is line 1.
            let line_no = index + 2;
            let pair = parse_merge_line(line, line_no)?;

            let next_id = merges.next_id();
            if let Some(undefined) = [pair.left, pair.right].into_iter().find(|&id| id >= next_id) {
                return Err(TokenizerError::MalformedModel {
                    line: line_no,
                    reason: format!(
                        "merge ({}) refers to token {} before it is defined",
                        pair, undefined
                    ),
                });
            }

            merges.push(pair).map_err(|e| TokenizerError::MalformedModel {
                line: line_no,
                reason: e.to_string(),
            })?;
        }

        let vocab =
            TokenVocabulary::from_merges(&merges).ok_or_else(|| TokenizerError::MalformedModel {
                line: 0,
                reason: "merges do not form a valid vocabulary".to_string(),
            })?;

        Ok((merges, vocab))
    }
}

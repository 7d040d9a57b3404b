//! BPE trainer implementation.
//!
//! This module implements greedy byte-pair training: the corpus is turned into
//! one token per byte, and on every iteration the most frequent adjacent pair is
//! replaced by a fresh token until the target vocabulary size is reached.

use super::counter::PairCounter;
use bytepair_core::{
    bytes_to_ids, replace_pair, validate_vocab_size, MergeTable, Pair, Result, TokenId,
    TokenVocabulary, TokenizerError, BASE_VOCAB_SIZE,
};
use log::{debug, info, warn};
use std::fmt;

/// Configuration for BPE training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Target vocabulary size, base tokens included
    pub vocab_size: usize,
    /// Report every merge at `info` level instead of `debug`
    pub verbose: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: 512,
            verbose: false,
        }
    }
}

impl TrainingConfig {
    /// Number of merges a training run with this config performs.
    pub fn num_merges(&self) -> usize {
        self.vocab_size.saturating_sub(BASE_VOCAB_SIZE)
    }
}

/// Progress report for a single learned merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent<'a> {
    /// 1-based iteration number
    pub iteration: usize,
    /// Total number of iterations in this run
    pub total: usize,
    /// The merged pair
    pub pair: Pair,
    /// ID assigned to the merge
    pub id: TokenId,
    /// Bytes of the new token
    pub bytes: &'a [u8],
    /// Occurrences of the pair when it was selected
    pub count: u64,
}

impl fmt::Display for MergeEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iteration {}/{}: [{}, {}] -> {} [\"{}\"] ({} occurrences)",
            self.iteration,
            self.total,
            self.pair.left,
            self.pair.right,
            self.id,
            self.bytes.escape_ascii(),
            self.count
        )
    }
}

/// BPE trainer.
///
/// Trains a merge table from raw bytes by iteratively merging the most
/// frequent adjacent pair.
#[derive(Debug, Clone)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    ///
    /// Fails with [`TokenizerError::InvalidArgument`] if the vocabulary size is
    /// out of range.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        validate_vocab_size(config.vocab_size)?;
        Ok(Self { config })
    }

    /// Create a new BPE trainer for the given vocabulary size.
    pub fn with_vocab_size(vocab_size: usize) -> Result<Self> {
        Self::new(TrainingConfig {
            vocab_size,
            ..Default::default()
        })
    }

    /// Get the training configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on `corpus`.
    ///
    /// # Returns
    /// The learned merge table and the vocabulary derived from it
    pub fn train(&self, corpus: &[u8]) -> Result<(MergeTable, TokenVocabulary)> {
        self.train_with_observer(corpus, |_| {})
    }

    /// Train on `corpus`, handing every learned merge to `observer`.
    pub fn train_with_observer<F>(
        &self,
        corpus: &[u8],
        mut observer: F,
    ) -> Result<(MergeTable, TokenVocabulary)>
    where
        F: FnMut(&MergeEvent<'_>),
    {
        let total = self.config.num_merges();
        // A corpus of n bytes supports at most n - 1 merges.
        let capacity = total.min(corpus.len());
        let mut merges = MergeTable::with_capacity(capacity);
        let mut vocab = TokenVocabulary::with_capacity(BASE_VOCAB_SIZE + capacity);
        let mut ids = bytes_to_ids(corpus);

        info!(
            "Training {} merges over {} bytes (target vocab size {})",
            total,
            corpus.len(),
            self.config.vocab_size
        );

        for i in 0..total {
            let counter = PairCounter::from_ids(&ids);
            let Some((pair, count)) = counter.most_frequent() else {
                warn!(
                    "Corpus exhausted after {} of {} merges; stopping early",
                    i, total
                );
                break;
            };

            let id = merges.push(pair)?;
            let vocab_id = vocab.push_merge(pair).ok_or_else(|| {
                TokenizerError::InvalidArgument(format!(
                    "pair ({}) refers to a token outside the vocabulary",
                    pair
                ))
            })?;
            debug_assert_eq!(id, vocab_id);

            ids = replace_pair(&ids, pair, id);

            let event = MergeEvent {
                iteration: i + 1,
                total,
                pair,
                id,
                bytes: vocab.get(id).unwrap_or_default(),
                count,
            };
            if self.config.verbose {
                info!("{}", event);
            } else {
                debug!("{}", event);
            }
            observer(&event);
        }

        info!(
            "Training finished: {} merges, vocab size {}, {} tokens remain",
            merges.len(),
            vocab.len(),
            ids.len()
        );

        Ok((merges, vocab))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_example() {
        let trainer = BpeTrainer::with_vocab_size(258).unwrap();
        let (merges, vocab) = trainer.train(b"aaabdaaabac").unwrap();

        assert_eq!(merges.len(), 2);
        assert_eq!(merges.get(Pair::new(97, 97)), Some(256));
        assert_eq!(vocab.get(256), Some(&b"aa"[..]));

        // After the first merge, (aa, a) and (a, b) both occur twice; (aa, a)
        // reaches that count first in the scan and wins the tie.
        assert_eq!(merges.get(Pair::new(256, 97)), Some(257));
        assert_eq!(merges.get(Pair::new(97, 98)), None);
        assert_eq!(vocab.get(257), Some(&b"aaa"[..]));
    }

    #[test]
    fn test_tie_break_earliest_pair() {
        // "ba" and "ab" both occur twice; "ba" reaches two first.
        let trainer = BpeTrainer::with_vocab_size(257).unwrap();
        let (merges, _) = trainer.train(b"bab.bab").unwrap();

        assert_eq!(merges.pair_of(256), Some(Pair::new(98, 97)));
    }

    #[test]
    fn test_zero_merges() {
        let trainer = BpeTrainer::with_vocab_size(256).unwrap();
        let (merges, vocab) = trainer.train(b"hello world").unwrap();

        assert!(merges.is_empty());
        assert_eq!(vocab.len(), 256);
    }

    #[test]
    fn test_dense_ids() {
        let trainer = BpeTrainer::with_vocab_size(300).unwrap();
        let corpus = b"the quick brown fox jumps over the lazy dog, then the fox sleeps";
        let (merges, vocab) = trainer.train(corpus).unwrap();

        let ids: Vec<TokenId> = merges.iter().map(|(_, id)| id).collect();
        let expected: Vec<TokenId> = (256..(256 + merges.len() as TokenId)).collect();
        assert_eq!(ids, expected);
        assert_eq!(vocab.len(), 256 + merges.len());

        for (pair, id) in merges.iter() {
            let mut joined = vocab.get(pair.left).unwrap().to_vec();
            joined.extend_from_slice(vocab.get(pair.right).unwrap());
            assert_eq!(vocab.get(id).unwrap(), joined.as_slice());
        }
    }

    #[test]
    fn test_degenerate_merges_allowed() {
        // Every pair is unique, yet all requested merges are performed.
        let trainer = BpeTrainer::with_vocab_size(259).unwrap();
        let (merges, _) = trainer.train(b"abcdef").unwrap();

        assert_eq!(merges.len(), 3);
        assert_eq!(merges.pair_of(256), Some(Pair::new(97, 98)));
    }

    #[test]
    fn test_exhausted_corpus_stops_early() {
        let trainer = BpeTrainer::with_vocab_size(270).unwrap();
        let (merges, vocab) = trainer.train(b"abcd").unwrap();

        // "abcd" collapses into a single token after three merges.
        assert_eq!(merges.len(), 3);
        assert_eq!(vocab.get(258), Some(&b"abcd"[..]));

        let (merges, _) = trainer.train(b"").unwrap();
        assert!(merges.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let corpus = b"abracadabra abracadabra cadabra";
        let trainer = BpeTrainer::with_vocab_size(270).unwrap();

        let first = trainer.train(corpus).unwrap();
        let second = trainer.train(corpus).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_vocab_size() {
        let result = BpeTrainer::with_vocab_size(100);
        assert!(matches!(result, Err(TokenizerError::InvalidArgument(_))));
    }

    #[test]
    fn test_observer_sees_every_merge() {
        let trainer = BpeTrainer::with_vocab_size(258).unwrap();
        let mut seen = Vec::new();
        trainer
            .train_with_observer(b"aaabdaaabac", |event| {
                seen.push((event.iteration, event.id, event.bytes.to_vec(), event.count));
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![(1, 256, b"aa".to_vec(), 4), (2, 257, b"aaa".to_vec(), 2)]
        );
    }

    #[test]
    fn test_event_display() {
        let event = MergeEvent {
            iteration: 1,
            total: 2,
            pair: Pair::new(97, 10),
            id: 256,
            bytes: b"a\n",
            count: 3,
        };
        assert_eq!(
            event.to_string(),
            "Iteration 1/2: [97, 10] -> 256 [\"a\\n\"] (3 occurrences)"
        );
    }
}

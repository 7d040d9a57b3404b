//! Pair counting for BPE training.
//!
//! This module counts adjacent token pairs in a single forward scan and keeps
//! track of the most frequent pair as the scan goes, so that the winner among
//! equal counts is the pair that reached that count first.

use ahash::AHashMap;
use bytepair_core::{Pair, TokenId};

/// Counter for adjacent pair frequencies.
#[derive(Debug, Default)]
pub struct PairCounter {
    /// Pair -> frequency count
    pair_counts: AHashMap<Pair, u64>,
    /// Current winner: first pair to reach the highest count
    best: Option<(Pair, u64)>,
}

impl PairCounter {
    /// Create a new pair counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new pair counter with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pair_counts: AHashMap::with_capacity(capacity),
            best: None,
        }
    }

    /// Count every adjacent pair in `ids`, left to right.
    pub fn from_ids(ids: &[TokenId]) -> Self {
        let mut counter = Self::with_capacity(ids.len() / 2);
        counter.add_ids(ids);
        counter
    }

    /// Add every adjacent pair in `ids` to the counts.
    pub fn add_ids(&mut self, ids: &[TokenId]) {
        for window in ids.windows(2) {
            self.add(Pair::new(window[0], window[1]));
        }
    }

    /// Add one occurrence of `pair`.
    ///
    /// The pair only takes over as the most frequent one when its count strictly
    /// exceeds the current maximum.
    pub fn add(&mut self, pair: Pair) {
        let count = self.pair_counts.entry(pair).or_insert(0);
        *count += 1;

        let count = *count;
        match self.best {
            Some((_, max)) if count <= max => {}
            _ => self.best = Some((pair, count)),
        }
    }

    /// The most frequent pair and its count, if any pair was seen.
    #[inline]
    pub fn most_frequent(&self) -> Option<(Pair, u64)> {
        self.best
    }

    /// Get the count for a pair.
    pub fn get(&self, pair: Pair) -> u64 {
        self.pair_counts.get(&pair).copied().unwrap_or(0)
    }

    /// Get the number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pair_counts.len()
    }

    /// Check if no pair was counted.
    pub fn is_empty(&self) -> bool {
        self.pair_counts.is_empty()
    }

    /// Clear all data from the counter.
    pub fn clear(&mut self) {
        self.pair_counts.clear();
        self.best = None;
    }
}

//! Merge table management for BPE.
//!
//! The merge table is the canonical trained state: every learned merge maps a
//! pair of adjacent token IDs to the ID of the token that replaces them. IDs are
//! handed out densely starting at [`BASE_VOCAB_SIZE`], so a merge's ID is also its
//! rank: lower ID means learned earlier and applied first when encoding.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use std::fmt;

/// Identifier of a single vocabulary entry.
pub type TokenId = u32;

/// Number of base tokens, one per byte value.
pub const BASE_VOCAB_SIZE: usize = 256;

/// Exclusive upper bound on vocabulary sizes; every ID must fit in a [`TokenId`].
pub const MAX_VOCAB_SIZE: usize = TokenId::MAX as usize;

/// An ordered pair of adjacent token IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    pub left: TokenId,
    pub right: TokenId,
}

impl Pair {
    #[inline]
    pub const fn new(left: TokenId, right: TokenId) -> Self {
        Self { left, right }
    }
}

impl From<(TokenId, TokenId)> for Pair {
    fn from((left, right): (TokenId, TokenId)) -> Self {
        Self { left, right }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

/// Learned merges with dense, insertion-ordered IDs.
///
/// Lookup goes through a hash map, while the ordered list keeps the learning
/// order so that iteration never depends on hash-map iteration order.
#[derive(Debug, Clone, Default)]
pub struct MergeTable {
    /// Pair -> assigned token ID
    ranks: AHashMap<Pair, TokenId>,
    /// Pairs in ascending ID order; `ordered[i]` owns ID `BASE_VOCAB_SIZE + i`
    ordered: Vec<Pair>,
}

impl MergeTable {
    /// Create a new empty merge table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new merge table with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ranks: AHashMap::with_capacity(capacity),
            ordered: Vec::with_capacity(capacity),
        }
    }

    /// The ID the next pushed merge will receive.
    #[inline]
    pub fn next_id(&self) -> TokenId {
        (BASE_VOCAB_SIZE + self.ordered.len()) as TokenId
    }

    /// Record a new merge and return its ID.
    ///
    /// Fails if `pair` is already present, since a second entry would leave a
    /// gap in the ID sequence.
    pub fn push(&mut self, pair: Pair) -> Result<TokenId> {
        if self.ranks.contains_key(&pair) {
            return Err(TokenizerError::DuplicateMerge(pair));
        }

        let id = self.next_id();
        self.ranks.insert(pair, id);
        self.ordered.push(pair);

        Ok(id)
    }

    /// Get the merged token ID for a pair, if the pair was learned.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<TokenId> {
        self.ranks.get(&pair).copied()
    }

    /// Get the pair a merged token ID was created from.
    pub fn pair_of(&self, id: TokenId) -> Option<Pair> {
        let index = (id as usize).checked_sub(BASE_VOCAB_SIZE)?;
        self.ordered.get(index).copied()
    }

    /// Get the number of merges.
    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Check if there are no merges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate over `(pair, id)` in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, TokenId)> + '_ {
        self.ordered
            .iter()
            .enumerate()
            .map(|(i, &pair)| (pair, (BASE_VOCAB_SIZE + i) as TokenId))
    }
}

// The lookup map is derived from the ordered list.
impl PartialEq for MergeTable {
    fn eq(&self, other: &Self) -> bool {
        self.ordered == other.ordered
    }
}

impl Eq for MergeTable {}

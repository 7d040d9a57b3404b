//! Vocabulary storage and lookup.
//!
//! The vocabulary maps every token ID to the bytes it stands for. It is derived
//! state: base IDs are seeded with their single byte, and each merged ID holds the
//! concatenation of its pair's byte strings, so it can always be rebuilt from a
//! [`MergeTable`].

use crate::core::merges::{MergeTable, Pair, TokenId, BASE_VOCAB_SIZE};

/// Reverse mapping: ID -> byte string, indexed densely by ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVocabulary {
    tokens: Vec<Vec<u8>>,
}

impl TokenVocabulary {
    /// Create a vocabulary holding only the 256 base tokens.
    pub fn new() -> Self {
        Self::with_capacity(BASE_VOCAB_SIZE)
    }

    /// Create a base vocabulary with room for `capacity` entries in total.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut tokens = Vec::with_capacity(capacity.max(BASE_VOCAB_SIZE));
        tokens.extend((0..=u8::MAX).map(|b| vec![b]));
        Self { tokens }
    }

    /// Rebuild the vocabulary by replaying merges in ascending ID order.
    ///
    /// Returns `None` if a merge refers to an ID that is not defined yet.
    pub fn from_merges(merges: &MergeTable) -> Option<Self> {
        let mut vocab = Self::with_capacity(BASE_VOCAB_SIZE + merges.len());

        for (pair, id) in merges.iter() {
            let pushed = vocab.push_merge(pair)?;
            debug_assert_eq!(pushed, id);
        }

        Some(vocab)
    }

    /// Append the token produced by merging `pair` and return its ID.
    ///
    /// Returns `None` if either member is not in the vocabulary.
    pub fn push_merge(&mut self, pair: Pair) -> Option<TokenId> {
        let left = self.get(pair.left)?;
        let right = self.get(pair.right)?;

        let mut merged = Vec::with_capacity(left.len() + right.len());
        merged.extend_from_slice(left);
        merged.extend_from_slice(right);

        let id = self.tokens.len() as TokenId;
        self.tokens.push(merged);
        Some(id)
    }

    /// Get the bytes for an ID.
    #[inline]
    pub fn get(&self, id: TokenId) -> Option<&[u8]> {
        self.tokens.get(id as usize).map(Vec::as_slice)
    }

    /// Get the number of entries, base tokens included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: the base tokens are present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(id, bytes)` in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &[u8])> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(id, bytes)| (id as TokenId, bytes.as_slice()))
    }
}

impl Default for TokenVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tokens() {
        let vocab = TokenVocabulary::new();

        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.get(0), Some(&[0u8][..]));
        assert_eq!(vocab.get(65), Some(&b"A"[..]));
        assert_eq!(vocab.get(255), Some(&[255u8][..]));
        assert_eq!(vocab.get(256), None);
    }

    #[test]
    fn test_push_merge_concatenates() {
        let mut vocab = TokenVocabulary::new();

        let aa = vocab.push_merge(Pair::new(b'a' as u32, b'a' as u32)).unwrap();
        let aab = vocab.push_merge(Pair::new(aa, b'b' as u32)).unwrap();

        assert_eq!(aa, 256);
        assert_eq!(aab, 257);
        assert_eq!(vocab.get(aab), Some(&b"aab"[..]));
    }

    #[test]
    fn test_push_merge_unknown_member() {
        let mut vocab = TokenVocabulary::new();
        assert_eq!(vocab.push_merge(Pair::new(300, 1)), None);
        assert_eq!(vocab.len(), 256);
    }

    #[test]
    fn test_from_merges_replays_in_order() {
        let mut merges = MergeTable::new();
        merges.push(Pair::new(104, 105)).unwrap(); // "hi"
        merges.push(Pair::new(256, 256)).unwrap(); // "hihi"

        let vocab = TokenVocabulary::from_merges(&merges).unwrap();
        assert_eq!(vocab.len(), 258);
        assert_eq!(vocab.get(256), Some(&b"hi"[..]));
        assert_eq!(vocab.get(257), Some(&b"hihi"[..]));
    }

    #[test]
    fn test_from_merges_forward_reference() {
        let mut merges = MergeTable::new();
        merges.push(Pair::new(257, 1)).unwrap();
        merges.push(Pair::new(1, 1)).unwrap();

        assert!(TokenVocabulary::from_merges(&merges).is_none());
    }
}

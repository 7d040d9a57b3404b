//! Rank-ordered BPE encoding.
//!
//! Encoding replays merges on new input in the order they were learned: on each
//! step the adjacent pair with the lowest merge ID present in the sequence is
//! replaced everywhere, until no learned pair remains. Pair frequency plays no
//! part in the choice.

use crate::core::{bytes_to_ids, replace_pair, MergeTable, Pair, TokenId};

/// Encoder borrowing a trained merge table.
#[derive(Debug, Clone, Copy)]
pub struct ByteEncoder<'a> {
    merges: &'a MergeTable,
}

impl<'a> ByteEncoder<'a> {
    /// Create an encoder over `merges`.
    pub fn new(merges: &'a MergeTable) -> Self {
        Self { merges }
    }

    /// Encode raw bytes into token IDs.
    ///
    /// Each step shortens the sequence by at least one token, so at most
    /// `bytes.len() - 1` steps run.
    pub fn encode(&self, bytes: &[u8]) -> Vec<TokenId> {
        let mut ids = bytes_to_ids(bytes);

        while ids.len() >= 2 {
            let Some((pair, id)) = self.lowest_ranked_pair(&ids) else {
                break;
            };
            ids = replace_pair(&ids, pair, id);
        }

        ids
    }

    /// Find the learned pair with the smallest merge ID in `ids`.
    ///
    /// Merge IDs are unique, so the minimum is unambiguous.
    fn lowest_ranked_pair(&self, ids: &[TokenId]) -> Option<(Pair, TokenId)> {
        ids.windows(2)
            .filter_map(|window| {
                let pair = Pair::new(window[0], window[1]);
                self.merges.get(pair).map(|id| (pair, id))
            })
            .min_by_key(|&(_, id)| id)
    }
}

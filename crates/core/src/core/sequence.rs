//! Token sequence helpers shared by training and encoding.

use crate::core::merges::{Pair, TokenId};

/// Map each byte to its base token ID.
#[inline]
pub fn bytes_to_ids(bytes: &[u8]) -> Vec<TokenId> {
    bytes.iter().map(|&b| TokenId::from(b)).collect()
}

/// Replace every non-overlapping occurrence of `pair` with `new_id`.
///
/// Scans left to right and skips both members on a match, so a token consumed
/// by one merge is never reused as the left half of the next.
pub fn replace_pair(ids: &[TokenId], pair: Pair, new_id: TokenId) -> Vec<TokenId> {
    let mut out = Vec::with_capacity(ids.len());
    let mut i = 0;

    while i < ids.len() {
        if i + 1 < ids.len() && ids[i] == pair.left && ids[i + 1] == pair.right {
            out.push(new_id);
            i += 2;
        } else {
            out.push(ids[i]);
            i += 1;
        }
    }

    out
}

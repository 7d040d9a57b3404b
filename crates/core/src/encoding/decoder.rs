//! Token ID to byte decoding.

use crate::core::{TokenId, TokenVocabulary};
use crate::error::{Result, TokenizerError};

/// Decoder borrowing a token vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct ByteDecoder<'a> {
    vocab: &'a TokenVocabulary,
}

impl<'a> ByteDecoder<'a> {
    /// Create a decoder over `vocab`.
    pub fn new(vocab: &'a TokenVocabulary) -> Self {
        Self { vocab }
    }

    /// Decode token IDs back to bytes.
    ///
    /// Fails on the first ID missing from the vocabulary, reporting its
    /// zero-based position; nothing is skipped or substituted.
    pub fn decode(&self, ids: &[TokenId]) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(ids.len() * 2);
        self.decode_into(ids, &mut bytes)?;
        Ok(bytes)
    }

    /// Decode token IDs, appending the bytes to `out`.
    ///
    /// On error `out` may hold the bytes of the IDs before the failing one.
    pub fn decode_into(&self, ids: &[TokenId], out: &mut Vec<u8>) -> Result<()> {
        for (position, &id) in ids.iter().enumerate() {
            let token = self
                .vocab
                .get(id)
                .ok_or(TokenizerError::UnknownToken { id, position })?;
            out.extend_from_slice(token);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pair;

    #[test]
    fn test_decode_base_tokens() {
        let vocab = TokenVocabulary::new();
        let decoder = ByteDecoder::new(&vocab);

        assert_eq!(decoder.decode(&[65, 66]).unwrap(), b"AB");
        assert_eq!(decoder.decode(&[]).unwrap(), b"");
        assert_eq!(decoder.decode(&[0, 255]).unwrap(), vec![0u8, 255]);
    }

    #[test]
    fn test_decode_merged_tokens() {
        let mut vocab = TokenVocabulary::new();
        let hi = vocab.push_merge(Pair::new(104, 105)).unwrap();
        let decoder = ByteDecoder::new(&vocab);

        assert_eq!(decoder.decode(&[hi, 33, hi]).unwrap(), b"hi!hi");
    }

    #[test]
    fn test_unknown_token() {
        let vocab = TokenVocabulary::new();
        let decoder = ByteDecoder::new(&vocab);

        let err = decoder.decode(&[999_999]).unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::UnknownToken {
                id: 999_999,
                position: 0
            }
        ));
    }

    #[test]
    fn test_unknown_token_position() {
        let vocab = TokenVocabulary::new();
        let decoder = ByteDecoder::new(&vocab);

        let err = decoder.decode(&[65, 66, 256, 67]).unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::UnknownToken {
                id: 256,
                position: 2
            }
        ));
        assert_eq!(err.to_string(), "Unknown token ID 256 at position 2");
    }
}

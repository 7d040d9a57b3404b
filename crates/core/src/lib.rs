//! Bytepair-core - Core BPE data model
//!
//! This crate provides the fundamental data structures for byte-pair encoding
//! (BPE), shared by the trainer, the tokenizer and the model codec, together
//! with the encoder and decoder that apply a trained model.
//!
//! # Features
//!
//! - Dense token IDs: `0..=255` are raw bytes, merges start at 256
//! - Merge table whose IDs double as merge priority
//! - Vocabulary derived from the merge table by replay
//! - Rank-ordered encoding and strict decoding
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::{MergeTable, Pair, TokenVocabulary};
//!
//! let mut merges = MergeTable::new();
//! let id = merges.push(Pair::new(b'a' as u32, b'b' as u32))?;
//!
//! let vocab = TokenVocabulary::from_merges(&merges).unwrap();
//! assert_eq!(vocab.get(id), Some(&b"ab"[..]));
//! # Ok::<(), bytepair_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data model
pub mod core;
pub use self::core::{
    bytes_to_ids, replace_pair, MergeTable, Pair, TokenId, TokenVocabulary, BASE_VOCAB_SIZE,
    MAX_VOCAB_SIZE,
};

// Encoding and decoding with a trained model
pub mod encoding;
pub use encoding::{ByteDecoder, ByteEncoder};

/// Check that `vocab_size` is a valid training target.
///
/// Sizes must lie within `[BASE_VOCAB_SIZE, MAX_VOCAB_SIZE)`.
pub fn validate_vocab_size(vocab_size: usize) -> Result<()> {
    if !(BASE_VOCAB_SIZE..MAX_VOCAB_SIZE).contains(&vocab_size) {
        return Err(TokenizerError::InvalidArgument(format!(
            "vocab size must be within [{}, {}), got {}",
            BASE_VOCAB_SIZE, MAX_VOCAB_SIZE, vocab_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vocab_size() {
        assert!(validate_vocab_size(256).is_ok());
        assert!(validate_vocab_size(512).is_ok());
        assert!(validate_vocab_size(MAX_VOCAB_SIZE - 1).is_ok());

        assert!(matches!(
            validate_vocab_size(255),
            Err(TokenizerError::InvalidArgument(_))
        ));
        assert!(matches!(
            validate_vocab_size(MAX_VOCAB_SIZE),
            Err(TokenizerError::InvalidArgument(_))
        ));
    }
}

//! Core BPE data model.
//!
//! This module contains the vocabulary state shared by training, encoding and
//! persistence: token IDs, pairs, the merge table and the derived vocabulary.

pub mod merges;
pub mod sequence;
pub mod vocab;

pub use merges::{MergeTable, Pair, TokenId, BASE_VOCAB_SIZE, MAX_VOCAB_SIZE};
pub use sequence::{bytes_to_ids, replace_pair};
pub use vocab::TokenVocabulary;

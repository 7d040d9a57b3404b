//! Applying a trained model to data.
//!
//! This module provides the two read-only consumers of a trained model:
//! - Encoding: bytes to token IDs, driven by the merge table alone
//! - Decoding: token IDs back to bytes, driven by the vocabulary alone

pub mod decoder;
pub mod encoder;

pub use decoder::ByteDecoder;
pub use encoder::ByteEncoder;

//! On-disk model format.
//!
//! A trained model is stored as two text files side by side:
//!
//! - `<name>.model`: the merge list, authoritative. Line 1 is [`FORMAT_TAG`];
//!   every further line is `"<left> <right>"` in decimal, one merge per line in
//!   ascending ID order. IDs are implied by position, starting at 256.
//! - `<name>.vocab`: a human-readable dump of every token, never read back.

use bytepair_core::{Pair, Result, TokenId, TokenizerError};
use std::path::{Path, PathBuf};

/// First line of every merge-list file.
pub const FORMAT_TAG: &str = "bytepair v1";

/// Extension of the merge-list file.
pub const MODEL_EXTENSION: &str = "model";

/// Extension of the vocabulary dump.
pub const VOCAB_EXTENSION: &str = "vocab";

/// Paths of the two files making up a saved model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    /// Merge-list file
    pub model: PathBuf,
    /// Vocabulary dump
    pub vocab: PathBuf,
}

impl ModelPaths {
    /// Paths for model `name` stored under `dir`.
    pub fn new(dir: &Path, name: &str) -> Self {
        Self {
            model: dir.join(format!("{}.{}", name, MODEL_EXTENSION)),
            vocab: dir.join(format!("{}.{}", name, VOCAB_EXTENSION)),
        }
    }
}

/// Check that `path` names a merge-list file.
pub fn check_model_extension(path: &Path) -> Result<()> {
    match path.extension() {
        Some(ext) if ext == MODEL_EXTENSION => Ok(()),
        _ => Err(TokenizerError::InvalidArgument(format!(
            "model file {} should have .{} extension",
            path.display(),
            MODEL_EXTENSION
        ))),
    }
}

/// Parse one merge line. `line_no` is 1-based and only used for errors.
pub fn parse_merge_line(line: &str, line_no: usize) -> Result<Pair> {
    let malformed = |reason: String| TokenizerError::MalformedModel {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.split(' ').collect();
    if fields.len() != 2 {
        return Err(malformed(format!(
            "expected two token IDs, found {} fields in {:?}",
            fields.len(),
            line
        )));
    }

    let parse = |field: &str| {
        field
            .parse::<TokenId>()
            .map_err(|e| malformed(format!("invalid token ID {:?}: {}", field, e)))
    };

    Ok(Pair::new(parse(fields[0])?, parse(fields[1])?))
}

/// Quote a byte string for the vocabulary dump.
pub fn quote(bytes: &[u8]) -> String {
    format!("\"{}\"", bytes.escape_ascii())
}

/// Vocabulary dump line for a base token.
pub fn base_token_line(id: TokenId, bytes: &[u8]) -> String {
    format!("[{}] {}", quote(bytes), id)
}

/// Vocabulary dump line for a merged token.
pub fn merged_token_line(id: TokenId, left: &[u8], right: &[u8], merged: &[u8]) -> String {
    format!(
        "[{}][{}] -> [{}] {}",
        quote(left),
        quote(right),
        quote(merged),
        id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_paths() {
        let paths = ModelPaths::new(Path::new("models"), "shakespeare");
        assert_eq!(paths.model, Path::new("models/shakespeare.model"));
        assert_eq!(paths.vocab, Path::new("models/shakespeare.vocab"));
    }

    #[test]
    fn test_check_model_extension() {
        assert!(check_model_extension(Path::new("models/a.model")).is_ok());
        assert!(matches!(
            check_model_extension(Path::new("foo.txt")),
            Err(TokenizerError::InvalidArgument(_))
        ));
        assert!(check_model_extension(Path::new("model")).is_err());
        assert!(check_model_extension(Path::new("a.model.bak")).is_err());
    }

    #[test]
    fn test_parse_merge_line() {
        assert_eq!(parse_merge_line("97 98", 2).unwrap(), Pair::new(97, 98));
        assert_eq!(parse_merge_line("256 0", 3).unwrap(), Pair::new(256, 0));
    }

    #[test]
    fn test_parse_merge_line_wrong_field_count() {
        for line in ["97 98 99", "97", "", "97  98"] {
            let err = parse_merge_line(line, 4).unwrap_err();
            assert!(
                matches!(err, TokenizerError::MalformedModel { line: 4, .. }),
                "line {:?} gave {:?}",
                line,
                err
            );
        }
    }

    #[test]
    fn test_parse_merge_line_not_a_number() {
        for line in ["a b", "97 -1", "97 4294967296", "97 98\t"] {
            assert!(matches!(
                parse_merge_line(line, 2),
                Err(TokenizerError::MalformedModel { line: 2, .. })
            ));
        }
    }

    #[test]
    fn test_dump_lines() {
        assert_eq!(base_token_line(10, b"\n"), "[\"\\n\"] 10");
        assert_eq!(base_token_line(65, b"A"), "[\"A\"] 65");
        assert_eq!(
            merged_token_line(256, b"a", b"\"", b"a\""),
            "[\"a\"][\"\\\"\"] -> [\"a\\\"\"] 256"
        );
        assert_eq!(quote(&[0xff]), "\"\\xff\"");
    }
}

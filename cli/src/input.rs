//! Reading command input from files or standard input.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Read every file in `paths`, concatenated in order.
///
/// With no paths, standard input is read instead.
pub fn read_inputs(paths: &[PathBuf]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    if paths.is_empty() {
        io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("Failed to read standard input")?;
        return Ok(buffer);
    }

    for path in paths {
        let mut file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        file.read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenates_in_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second.bin");
        std::fs::write(&first, b"hello ").unwrap();
        std::fs::write(&second, b"\x00world\xff").unwrap();

        let data = read_inputs(&[second.clone(), first.clone()]).unwrap();
        assert_eq!(data, b"\x00world\xffhello ");

        let data = read_inputs(&[first, second]).unwrap();
        assert_eq!(data, b"hello \x00world\xff");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let err = read_inputs(&[missing]).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open"));
    }
}

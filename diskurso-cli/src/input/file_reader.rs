//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        let content = String::from_utf8(bytes)
            .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;

        log::debug!("read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("tala.txt");

        let content = "Masaya ako, pero pagod na ako.\nI am happy but tired.";
        fs::write(&file_path, content).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.txt"));

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        let err_msg = FileReader::read_text(&file_path).unwrap_err().to_string();
        assert!(err_msg.contains("not valid UTF-8"));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
    }
}

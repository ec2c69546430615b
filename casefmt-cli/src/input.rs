//! Input handling for the non-interactive surface

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Text source with UTF-8 validation
pub struct TextSource;

impl TextSource {
    /// Read a file as UTF-8 text
    pub fn read_file(path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(content)
    }

    /// Read all of a stream as UTF-8 text
    pub fn read_stream<R: Read>(mut reader: R) -> Result<String> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read input stream")?;
        Ok(content)
    }
}

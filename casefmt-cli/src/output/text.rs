//! Plain text output renderer

use super::{FormatResult, OutputRenderer};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text renderer - writes the transformed text and nothing else
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    /// Create a new text renderer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextRenderer<io::Stdout> {
    /// Create a renderer that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputRenderer for TextRenderer<W> {
    fn render(&mut self, result: &FormatResult) -> Result<()> {
        writeln!(self.writer, "{}", result.output)?;
        self.writer.flush()?;
        Ok(())
    }
}

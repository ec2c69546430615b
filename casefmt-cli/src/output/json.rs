//! JSON output renderer

use super::{FormatResult, OutputRenderer};
use anyhow::Result;
use std::io::{self, Write};

/// JSON renderer - writes the result as a pretty-printed JSON object
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Create a new JSON renderer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl JsonRenderer<io::Stdout> {
    /// Create a renderer that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputRenderer for JsonRenderer<W> {
    fn render(&mut self, result: &FormatResult) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, result)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

//! Interactive console session
//!
//! Reads one line of subject text and one numeric menu choice, binds the
//! matching strategy into a [`TextProcessor`], and prints the formatted
//! result. An unrecognized choice leaves the processor unbound, so the text
//! passes through unchanged after a notice. The session never fails on user
//! input; it is generic over reader and writer so tests can drive it with
//! in-memory buffers.

use std::io::{BufRead, Write};

use casefmt_core::{FormatKind, TextProcessor};

use crate::error::CliResult;

/// One interactive prompt-read-format-print session
pub struct InteractiveSession<R, W> {
    reader: R,
    writer: W,
    show_prompts: bool,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    /// Create a session over the given reader and writer
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            show_prompts: true,
        }
    }

    /// Enable or disable prompt output (the formatted result and the
    /// invalid-choice notice are printed regardless)
    pub fn with_prompts(mut self, show_prompts: bool) -> Self {
        self.show_prompts = show_prompts;
        self
    }

    /// Run the session to completion
    pub fn run(&mut self) -> CliResult<()> {
        if self.show_prompts {
            write!(self.writer, "Enter a sentence: ")?;
            self.writer.flush()?;
        }
        let text = self.read_line()?;

        if self.show_prompts {
            write!(self.writer, "\nChoose a format:\n")?;
            for kind in FormatKind::all() {
                writeln!(self.writer, "{}) {}", kind.choice(), kind.menu_label())?;
            }
            write!(self.writer, "Enter choice (1-3): ")?;
            self.writer.flush()?;
        }
        let choice = self.read_line()?;

        let mut processor = TextProcessor::new();
        match Self::parse_choice(&choice) {
            Some(kind) => {
                log::debug!("Selected format: {kind}");
                processor.set_formatter(kind.formatter());
            }
            None => {
                log::info!("Unrecognized choice {choice:?}, falling back to passthrough");
                writeln!(self.writer, "Invalid choice. Using default (no formatting).")?;
            }
        }

        if self.show_prompts {
            write!(self.writer, "\nFormatted output:\n")?;
        }
        writeln!(self.writer, "{}", processor.format(&text))?;
        self.writer.flush()?;

        Ok(())
    }

    /// Read one line without its trailing newline; EOF reads as empty
    fn read_line(&mut self) -> CliResult<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Anything that does not parse to a menu number is an invalid choice
    fn parse_choice(input: &str) -> Option<FormatKind> {
        input
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(FormatKind::from_choice)
    }
}

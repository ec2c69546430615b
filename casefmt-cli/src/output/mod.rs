//! Output rendering module

use anyhow::Result;
use casefmt_core::FormatKind;
use serde::{Deserialize, Serialize};

/// Result of one formatting run, as rendered by the output layer
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResult {
    /// The original input text
    pub input: String,
    /// The applied case, if any was selected
    pub case: Option<FormatKind>,
    /// The transformed text
    pub output: String,
}

/// Trait for output renderers
pub trait OutputRenderer {
    /// Render a formatting result
    fn render(&mut self, result: &FormatResult) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

//! Context object that delegates formatting to a swappable strategy

use crate::strategy::TextFormatter;

/// Text processor holding at most one formatting strategy
///
/// The processor owns its strategy exclusively. It starts unbound; binding is
/// explicit via [`set_formatter`](Self::set_formatter) and replacing a binding
/// drops the previous one. With no strategy bound, [`format`](Self::format) is
/// the identity transform.
#[derive(Default)]
pub struct TextProcessor {
    formatter: Option<Box<dyn TextFormatter>>,
}

impl TextProcessor {
    /// Create a processor with no strategy bound
    pub fn new() -> Self {
        Self { formatter: None }
    }

    /// Bind a formatting strategy, replacing (and dropping) any previous one
    pub fn set_formatter(&mut self, formatter: Box<dyn TextFormatter>) {
        self.formatter = Some(formatter);
    }

    /// Remove the current strategy, returning to the identity transform
    pub fn clear_formatter(&mut self) {
        self.formatter = None;
    }

    /// Whether a strategy is currently bound
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    /// Apply the bound strategy, or return the input unchanged if none is set
    pub fn format(&self, text: &str) -> String {
        match &self.formatter {
            Some(formatter) => formatter.format(text),
            None => text.to_string(),
        }
    }
}

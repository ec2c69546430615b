//! Strategy selection by menu number or name

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::strategy::{
    LowerCaseFormatter, TextFormatter, TitleCaseFormatter, UpperCaseFormatter,
};

/// The available formatting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Map every character to uppercase
    Upper,
    /// Map every character to lowercase
    Lower,
    /// Uppercase the first character of each word, lowercase the rest
    Title,
}

impl FormatKind {
    /// All kinds, in menu order
    pub fn all() -> [FormatKind; 3] {
        [FormatKind::Upper, FormatKind::Lower, FormatKind::Title]
    }

    /// Map an interactive menu choice to a kind (1, 2, or 3)
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(FormatKind::Upper),
            2 => Some(FormatKind::Lower),
            3 => Some(FormatKind::Title),
            _ => None,
        }
    }

    /// The menu number shown in the interactive prompt
    pub fn choice(&self) -> i64 {
        match self {
            FormatKind::Upper => 1,
            FormatKind::Lower => 2,
            FormatKind::Title => 3,
        }
    }

    /// Canonical name, as accepted by `FromStr` and used in configuration
    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Upper => "upper",
            FormatKind::Lower => "lower",
            FormatKind::Title => "title",
        }
    }

    /// Label shown in the interactive menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            FormatKind::Upper => "Uppercase",
            FormatKind::Lower => "Lowercase",
            FormatKind::Title => "Title Case",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            FormatKind::Upper => "Uppercase every character",
            FormatKind::Lower => "Lowercase every character",
            FormatKind::Title => "Capitalize the first letter of each word",
        }
    }

    /// Construct the concrete strategy for this kind
    pub fn formatter(&self) -> Box<dyn TextFormatter> {
        match self {
            FormatKind::Upper => Box::new(UpperCaseFormatter),
            FormatKind::Lower => Box::new(LowerCaseFormatter),
            FormatKind::Title => Box::new(TitleCaseFormatter),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(FormatKind::Upper),
            "lower" | "lowercase" => Ok(FormatKind::Lower),
            "title" | "titlecase" => Ok(FormatKind::Title),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

//! Case-transformation strategies behind a common formatting trait.
//!
//! The crate provides three interchangeable formatters (uppercase, lowercase,
//! title case) implementing [`TextFormatter`], a [`TextProcessor`] context that
//! owns at most one formatter and delegates to it, and [`FormatKind`] for
//! selecting a formatter by menu number or name.
//!
//! ```
//! use casefmt_core::{FormatKind, TextProcessor};
//!
//! let mut processor = TextProcessor::new();
//! processor.set_formatter(FormatKind::Title.formatter());
//! assert_eq!(processor.format("tHiS iS a TeSt"), "This Is A Test");
//! ```

pub mod error;
pub mod processor;
pub mod selection;
pub mod strategy;

pub use error::{Error, Result};
pub use processor::TextProcessor;
pub use selection::FormatKind;
pub use strategy::{LowerCaseFormatter, TextFormatter, TitleCaseFormatter, UpperCaseFormatter};

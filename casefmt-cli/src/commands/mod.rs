//! CLI command implementations

use clap::Subcommand;

pub mod format;
pub mod list;

/// Available CLI commands
///
/// Running the binary without a subcommand starts the interactive session.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a case transformation without interactive prompts
    Format(format::FormatArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available case formats
    Formats,
}

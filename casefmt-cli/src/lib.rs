//! Casefmt CLI library
//!
//! This library provides the command-line interface for the casefmt
//! case-transformation tool: the interactive session, the non-interactive
//! subcommands, and their configuration and output layers.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod interactive;
pub mod output;

pub use error::{CliError, CliResult};

//! casefmt command-line entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use casefmt_cli::commands::{list, Commands, ListCommands};
use casefmt_cli::config::CliConfig;
use casefmt_cli::interactive::InteractiveSession;

/// Interchangeable case transformations for console text
#[derive(Debug, Parser)]
#[command(name = "casefmt", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    match cli.command {
        Some(Commands::Format(args)) => args.execute(&config),
        Some(Commands::List { subcommand }) => match subcommand {
            ListCommands::Formats => list::list_formats(&mut std::io::stdout()),
        },
        None => {
            let stdin = std::io::stdin();
            InteractiveSession::new(stdin.lock(), std::io::stdout())
                .with_prompts(config.interactive.show_prompts)
                .run()
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

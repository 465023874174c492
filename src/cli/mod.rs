//! Command-line interface for galley
//!
//! This module provides the clap command tree and the global flags shared by
//! every command. Command chrome goes through [`Console`]; workload
//! announcements bypass it entirely so the demo output stays stable.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Console;

/// Galley - sequential vs concurrent task execution demos
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (TOML, JSON, or YAML)
    #[arg(short, long, value_name = "FILE", env = "GALLEY_CONFIG", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the workload and print the total wall-clock time
    Run(commands::run::RunArgs),
    /// List the available execution modes
    Modes,
    /// Configuration management
    Config(commands::config::ConfigArgs),
    /// Show version information
    Version(commands::version::VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let console = Console::new(self.verbose > 0, self.quiet);

        match self.command {
            Some(Commands::Run(args)) => {
                commands::run::execute(args, self.config.as_deref(), &console)
            }
            Some(Commands::Modes) => commands::modes::execute(&console),
            Some(Commands::Config(args)) => {
                commands::config::execute(args, self.config.as_deref(), &console)
            }
            Some(Commands::Version(args)) => commands::version::execute(args),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        });

    // Diagnostics go to stderr; stdout belongs to the workload's own output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

//! Configuration command implementations
//!
//! Commands for managing galley configuration.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use std::fs;
use std::path::Path;

use crate::cli::Console;
use crate::config::GalleyConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a starter galley.toml into the current directory
    Init {
        /// Overwrite an existing galley.toml
        #[arg(short, long)]
        force: bool,
    },
    /// Print the merged configuration as TOML
    Show,
    /// Check that the merged configuration loads and is valid
    Validate,
}

/// Execute config commands
pub fn execute(args: ConfigArgs, config_path: Option<&str>, console: &Console) -> Result<()> {
    match args.command {
        ConfigCommand::Init { force } => init(force, console),
        ConfigCommand::Show => show(config_path),
        ConfigCommand::Validate => validate(config_path, console),
    }
}

fn init(force: bool, console: &Console) -> Result<()> {
    let target = Path::new("galley.toml");
    if target.exists() && !force {
        bail!("galley.toml already exists (use --force to overwrite)");
    }

    fs::write(target, GalleyConfig::default_file_contents())
        .context("failed to write galley.toml")?;

    console.success("Wrote galley.toml with the default workload");
    console.info("Edit galley.toml to change the tasks or the default mode");
    Ok(())
}

fn show(config_path: Option<&str>) -> Result<()> {
    let config = GalleyConfig::load(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn validate(config_path: Option<&str>, console: &Console) -> Result<()> {
    let config = GalleyConfig::load(config_path)?;
    console.success(&format!(
        "Configuration is valid: {} tasks, {} mode",
        config.run.tasks.len(),
        config.run.mode.as_str()
    ));
    Ok(())
}

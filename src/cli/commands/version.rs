//! Version command implementation

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct VersionArgs {
    /// Show detailed build information
    #[arg(short, long)]
    pub detailed: bool,
}

/// Execute the version command
pub fn execute(args: VersionArgs) -> Result<()> {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.detailed {
        println!("{}", env!("CARGO_PKG_DESCRIPTION"));
        println!("License: {}", env!("CARGO_PKG_LICENSE"));
        println!("Rust edition: 2024");
        println!(
            "Profile: {}",
            if cfg!(debug_assertions) { "debug" } else { "release" }
        );
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;

use galley::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}

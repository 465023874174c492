//! Modes command implementation
//!
//! Lists the available execution modes next to their classic program ids so
//! the numeric aliases stay discoverable.

use anyhow::Result;
use clap::ValueEnum;

use crate::cli::Console;
use crate::exec::ExecutionMode;

/// Execute the modes command
pub fn execute(console: &Console) -> Result<()> {
    console.header("Execution modes");
    for mode in ExecutionMode::value_variants() {
        let label = format!("{} ({})", mode.as_str(), mode.numeric_id());
        console.table_row(&label, mode.describe());
    }

    console.blank_line();
    console.info(&format!(
        "{} logical cores available for task threads",
        num_cpus::get()
    ));
    Ok(())
}

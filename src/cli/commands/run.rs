//! Run command implementation
//!
//! Dispatches the configured workload in a chosen execution mode and closes
//! with the classic line, `Total time = {N} seconds`.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::cli::Console;
use crate::config::GalleyConfig;
use crate::exec::{ExecutionMode, RunReport, Scheduler};
use crate::task::Task;

#[derive(Args)]
pub struct RunArgs {
    /// Execution mode; the classic program ids 1-3 work as aliases
    #[arg(short, long, value_enum)]
    pub mode: Option<ExecutionMode>,

    /// Replace the configured workload (repeatable), e.g. --task espresso:40
    #[arg(short, long = "task", value_name = "NAME:MILLIS", value_delimiter = ',')]
    pub tasks: Vec<Task>,

    /// Output format for the closing report
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The classic "Total time = {N} seconds" line
    Text,
    /// JSON with exact elapsed milliseconds for machine processing
    Json,
}

/// Execute the run command
pub fn execute(args: RunArgs, config_path: Option<&str>, console: &Console) -> Result<()> {
    let config = GalleyConfig::load(config_path)?;

    let tasks = if args.tasks.is_empty() {
        config.workload()
    } else {
        args.tasks
    };
    let mode = args.mode.unwrap_or(config.run.mode);

    let described: Vec<String> = tasks.iter().map(Task::to_string).collect();
    console.verbose(&format!(
        "Running program {} ({} mode): {}",
        mode.numeric_id(),
        mode.as_str(),
        described.join(", ")
    ));

    let scheduler = Scheduler::stdout();
    let report = scheduler.run(mode, &tasks)?;

    match args.format {
        OutputFormat::Text => scheduler.sink().write_line(&report.summary()),
        OutputFormat::Json => print_json_report(mode, &tasks, &report)?,
    }

    console.verbose(&format!(
        "{} tasks finished in {:.3}s",
        tasks.len(),
        report.elapsed.as_secs_f64()
    ));
    Ok(())
}

/// Print the JSON report
fn print_json_report(mode: ExecutionMode, tasks: &[Task], report: &RunReport) -> Result<()> {
    let payload = json!({
        "mode": mode.as_str(),
        "tasks": tasks.iter().map(|task| json!({
            "name": task.name(),
            "duration_ms": task.duration().as_millis() as u64,
        })).collect::<Vec<_>>(),
        "elapsed_ms": report.elapsed.as_millis() as u64,
        "total_seconds": report.total_seconds(),
    });

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

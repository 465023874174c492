//! # Galley - Sequential vs Concurrent Task Execution Demos
//!
//! A small command-line lab for watching how the same workload behaves when
//! it is run sequentially, concurrently, or concurrently with synchronized
//! console output. Every task announces when it starts and finishes, and
//! every run closes with the classic `Total time = {N} seconds` line.
//!
//! ## Features
//!
//! - **Three execution modes**: sequential, concurrent, and synchronized,
//!   selectable by name or by the classic program ids 1-3
//! - **Honest timing**: wall-clock time measured around dispatch and join,
//!   truncated to whole seconds like the original demos
//! - **Configurable workload**: tasks come from layered configuration
//!   (embedded defaults, config files, environment) or `--task` overrides
//! - **Observable interleaving**: start lines are written fragment by
//!   fragment, so unsynchronized runs can visibly tear on a busy console
//!
//! ## Quick Start
//!
//! ```bash
//! # Install galley
//! cargo install galley
//!
//! # Run the default workload (coffee 2000ms, toast 3000ms)
//! galley run
//!
//! # Compare the modes
//! galley run --mode sequential
//! galley run --mode 2
//! ```

pub mod cli;
pub mod config;
pub mod exec;
pub mod task;

pub use cli::{Cli, Console};
pub use config::GalleyConfig;
pub use exec::{ExecutionMode, OutputLock, RunReport, Scheduler};
pub use task::{ProgressSink, StdoutSink, Task};

/// Result type alias for galley operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

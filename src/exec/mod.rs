//! Execution modes and the scheduler that drives them
//!
//! This module decides *how* a workload runs, never *what* it does. It owns
//! three concerns:
//!
//! - **Mode selection**: [`ExecutionMode`] is the closed set of dispatch
//!   strategies. There is no fall-through for unknown modes; anything that
//!   parses is one of the three variants below.
//! - **Dispatch and join**: [`Scheduler::run`] fans a workload out according
//!   to the mode and always joins every thread before returning, so the
//!   timing report covers the entire run.
//! - **Console exclusion**: [`OutputLock`] serializes the start
//!   announcements in synchronized mode. The scheduler owns the lock and
//!   lends it to tasks; nothing else can reach it.
//!
//! The modes compare like this for the default two-task workload
//! (coffee 2000ms, toast 3000ms):
//!
//! ```text
//! sequential     coffee then toast        Total time = 5 seconds
//! concurrent     both at once, no lock    Total time = 3 seconds
//! synchronized   both at once, locked     Total time = 3 seconds
//! ```
//!
//! Concurrent and synchronized differ only in whether two start lines can
//! tear into each other mid-line on a busy console.
//!
//! # Example
//!
//! ```rust
//! use galley::exec::{ExecutionMode, Scheduler};
//! use galley::task::Task;
//!
//! let scheduler = Scheduler::stdout();
//! let tasks = vec![Task::from_millis("coffee", 20), Task::from_millis("toast", 30)];
//! let report = scheduler.run(ExecutionMode::Synchronized, &tasks)?;
//! assert!(report.elapsed.as_millis() >= 30);
//! # anyhow::Ok(())
//! ```

pub mod core;
pub mod guard;

// Re-export main types for easier access
pub use core::{ExecutionMode, RunReport, Scheduler};
pub use guard::OutputLock;

//! Workload definition: named tasks that sleep and announce themselves
//!
//! A [`Task`] models one unit of kitchen work ("coffee", "toast") as a name
//! plus a duration. Running a task writes `Creating {name}...` to its sink,
//! sleeps for the duration, then writes `Created {name}!`. The interesting
//! part is never the work itself; it is how the announcements of several
//! tasks land on the console under the different execution modes.

pub mod sink;

pub use sink::{ProgressSink, StdoutSink};

use anyhow::{Context, anyhow, bail};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::exec::OutputLock;

/// A named unit of work with a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    duration: Duration,
}

impl Task {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    pub fn from_millis(name: impl Into<String>, millis: u64) -> Self {
        Self::new(name, Duration::from_millis(millis))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Run the task to completion on the calling thread.
    ///
    /// When `start_lock` is given, only the start announcement is written
    /// under the lock. The finish announcement never locks, matching the
    /// classic demo this reproduces: a lock only protects the writes it
    /// actually wraps, and the unguarded finish lines are where that shows.
    pub fn run(&self, sink: &dyn ProgressSink, start_lock: Option<&OutputLock>) {
        match start_lock {
            Some(lock) => lock.with_lock(|| self.announce_start(sink)),
            None => self.announce_start(sink),
        }
        std::thread::sleep(self.duration);
        self.announce_finish(sink);
    }

    fn announce_start(&self, sink: &dyn ProgressSink) {
        sink.write_fragment(&format!("Creating {}...", self.name));
        sink.write_fragment("\n");
    }

    fn announce_finish(&self, sink: &dyn ProgressSink) {
        sink.write_fragment(&format!("Created {}!", self.name));
        sink.write_fragment("\n");
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.duration.as_millis())
    }
}

/// Parses the `name:millis` form used by `--task` overrides on the CLI.
impl FromStr for Task {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, millis) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("expected 'name:millis', got '{s}'"))?;

        let name = name.trim();
        if name.is_empty() {
            bail!("task name must not be empty in '{s}'");
        }

        let millis: u64 = millis
            .trim()
            .parse()
            .with_context(|| format!("invalid duration in '{s}': whole milliseconds required"))?;

        Ok(Task::from_millis(name, millis))
    }
}

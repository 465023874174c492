use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::exec::guard::OutputLock;
use crate::task::{ProgressSink, StdoutSink, Task};

/// How a workload is dispatched.
///
/// The three modes mirror the three classic console demos, which is why the
/// numeric program ids 1-3 are accepted as aliases on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One task after another on the calling thread.
    #[value(alias = "1")]
    Sequential,
    /// One thread per task, console writes unguarded.
    #[value(alias = "2")]
    Concurrent,
    /// One thread per task, start announcements serialized by a lock.
    #[value(alias = "3")]
    Synchronized,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Concurrent => "concurrent",
            ExecutionMode::Synchronized => "synchronized",
        }
    }

    /// Program id of the demo this mode reproduces.
    pub fn numeric_id(&self) -> u8 {
        match self {
            ExecutionMode::Sequential => 1,
            ExecutionMode::Concurrent => 2,
            ExecutionMode::Synchronized => 3,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => {
                "Runs tasks one after another; total time is the sum of all durations"
            }
            ExecutionMode::Concurrent => {
                "Runs every task on its own thread; start lines may interleave mid-line"
            }
            ExecutionMode::Synchronized => {
                "Runs every task on its own thread; start lines are written under a lock"
            }
        }
    }
}

/// Timing summary of one completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Wall-clock time from just before dispatch to just after the last task
    /// finished.
    pub elapsed: Duration,
}

impl RunReport {
    /// Elapsed time truncated to whole seconds, the figure the classic demos
    /// print. 2999ms reports as 2.
    pub fn total_seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// The closing console line of every run.
    pub fn summary(&self) -> String {
        format!("Total time = {} seconds", self.total_seconds())
    }
}

/// Dispatches a workload in a chosen [`ExecutionMode`] and times it.
///
/// The scheduler owns the sink all tasks write to and the lock that
/// synchronized mode lends to them. `run` does not return until every task
/// has finished, whatever the mode.
pub struct Scheduler {
    sink: Arc<dyn ProgressSink>,
    start_lock: OutputLock,
}

impl Scheduler {
    pub fn new(sink: Arc<dyn ProgressSink>) -> Self {
        Self {
            sink,
            start_lock: OutputLock::new(),
        }
    }

    /// Scheduler that writes to the process stdout.
    pub fn stdout() -> Self {
        Self::new(Arc::new(StdoutSink::new()))
    }

    /// The sink this scheduler hands to its tasks.
    pub fn sink(&self) -> &dyn ProgressSink {
        self.sink.as_ref()
    }

    /// Run the whole workload in `mode` and report the wall-clock time.
    pub fn run(&self, mode: ExecutionMode, tasks: &[Task]) -> Result<RunReport> {
        tracing::debug!("dispatching {} tasks in {} mode", tasks.len(), mode.as_str());
        let started = Instant::now();

        match mode {
            ExecutionMode::Sequential => self.run_sequential(tasks),
            ExecutionMode::Concurrent => self.run_threaded(tasks, None)?,
            ExecutionMode::Synchronized => self.run_threaded(tasks, Some(&self.start_lock))?,
        }

        let elapsed = started.elapsed();
        tracing::debug!("workload finished in {:.3}s", elapsed.as_secs_f64());
        Ok(RunReport { elapsed })
    }

    fn run_sequential(&self, tasks: &[Task]) {
        for task in tasks {
            task.run(self.sink.as_ref(), None);
        }
    }

    /// One scoped thread per task. Every handle is joined before this
    /// returns; a panicking task is reported only after its siblings have
    /// been given the chance to finish.
    fn run_threaded(&self, tasks: &[Task], start_lock: Option<&OutputLock>) -> Result<()> {
        if tasks.is_empty() {
            return Ok(());
        }

        let sink = self.sink.as_ref();

        crossbeam::thread::scope(|scope| -> Result<()> {
            let mut handles = Vec::with_capacity(tasks.len());
            for task in tasks {
                let handle = scope
                    .builder()
                    .name(format!("galley-{}", task.name()))
                    .spawn(move |_| {
                        tracing::trace!("thread for task '{}' started", task.name());
                        task.run(sink, start_lock);
                    })
                    .with_context(|| {
                        format!("failed to start a thread for task '{}'", task.name())
                    })?;
                handles.push(handle);
            }

            let mut first_panic: Option<String> = None;
            for handle in handles {
                let thread_name = handle.thread().name().unwrap_or("unnamed").to_string();
                if handle.join().is_err() && first_panic.is_none() {
                    first_panic = Some(thread_name);
                }
            }

            if let Some(thread_name) = first_panic {
                bail!("task thread '{thread_name}' panicked before finishing");
            }
            Ok(())
        })
        .map_err(|_| anyhow::anyhow!("thread panic occurred while running the workload"))?
    }
}

use std::io::Write;

/// Destination for task progress output.
///
/// Implementations must be callable from several threads at once: the
/// scheduler hands one sink to every task thread it spawns. Each call maps to
/// one underlying write, so a message and its trailing newline arrive as two
/// separate fragments. That granularity is what lets unsynchronized runs
/// interleave mid-line, which is the effect the demos exist to show.
pub trait ProgressSink: Send + Sync {
    /// Write one fragment, without appending anything.
    fn write_fragment(&self, fragment: &str);

    /// Write a message followed by a newline, as two fragments.
    fn write_line(&self, line: &str) {
        self.write_fragment(line);
        self.write_fragment("\n");
    }
}

/// Sink that forwards every fragment straight to stdout.
///
/// Each fragment is written and flushed immediately so the console shows
/// progress in real time instead of on buffer boundaries. Write errors are
/// swallowed: a closed stdout should not take the workload down with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressSink for StdoutSink {
    fn write_fragment(&self, fragment: &str) {
        let mut stdout = std::io::stdout();
        stdout.write_all(fragment.as_bytes()).ok();
        stdout.flush().ok();
    }
}

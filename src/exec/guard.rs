use std::sync::{Mutex, PoisonError};

/// Mutual exclusion for console writes.
///
/// The original demo reached for a global mutex; here the lock is a plain
/// value owned by whoever coordinates the writers (the scheduler) and lent
/// to tasks by reference for exactly the writes it should cover. Nothing
/// outside those writes can touch it, and two schedulers never contend.
#[derive(Debug, Default)]
pub struct OutputLock {
    inner: Mutex<()>,
}

impl OutputLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` while holding the lock.
    ///
    /// A writer that panics while holding the lock poisons it; the poison is
    /// discarded so the remaining writers keep their mutual exclusion instead
    /// of cascading panics across every later announcement.
    pub fn with_lock<T>(&self, action: impl FnOnce() -> T) -> T {
        let _held = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        action()
    }
}

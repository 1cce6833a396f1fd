//! Advance Scheduler Port - Deferred, cancellable auto-advance.
//!
//! After an answer the wizard waits a short presentation delay before
//! moving to the next question. At most one advance is ever pending: a new
//! schedule supersedes the previous one instead of stacking.

use std::time::Duration;

use futures::future::BoxFuture;

/// Work to run once the delay elapses.
pub type AdvanceTask = BoxFuture<'static, ()>;

/// Port for scheduling the deferred advance
pub trait AdvanceScheduler: Send + Sync {
    /// Run `task` after `delay`, cancelling any task still pending.
    fn schedule(&self, delay: Duration, task: AdvanceTask);

    /// Cancel the pending task. Returns true if one was pending.
    fn cancel(&self) -> bool;

    /// Whether a task is scheduled and has not run yet.
    fn is_pending(&self) -> bool;
}

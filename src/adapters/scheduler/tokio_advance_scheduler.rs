//! Tokio Advance Scheduler Adapter
//!
//! Runs the deferred advance on the Tokio runtime. Scheduling aborts the
//! previously pending task, so a burst of answers results in exactly one
//! advance.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

use crate::ports::{AdvanceScheduler, AdvanceTask};

/// Cancel-and-reschedule timer backed by `tokio::spawn`
#[derive(Debug, Default)]
pub struct TokioAdvanceScheduler {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TokioAdvanceScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // A panic while holding the guard leaves the slot itself consistent
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AdvanceScheduler for TokioAdvanceScheduler {
    fn schedule(&self, delay: Duration, task: AdvanceTask) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        if let Some(previous) = self.slot().replace(handle) {
            if !previous.is_finished() {
                trace!("superseding pending advance");
            }
            previous.abort();
        }
    }

    fn cancel(&self) -> bool {
        match self.slot().take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    fn is_pending(&self) -> bool {
        self.slot()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for TokioAdvanceScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.slot().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(counter: &Arc<AtomicUsize>) -> AdvanceTask {
        let counter = Arc::clone(counter);
        Box::pin(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test]
    async fn runs_task_after_delay() {
        let scheduler = TokioAdvanceScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        scheduler.schedule(Duration::from_millis(10), counting_task(&counter));
        assert!(scheduler.is_pending());
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_pending());
    }

    #[tokio::test]
    async fn rescheduling_supersedes_pending_task() {
        let scheduler = TokioAdvanceScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            scheduler.schedule(Duration::from_millis(30), counting_task(&counter));
        }
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancel_prevents_task() {
        let scheduler = TokioAdvanceScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        scheduler.schedule(Duration::from_millis(20), counting_task(&counter));
        assert!(scheduler.cancel());
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!scheduler.cancel());
    }
}

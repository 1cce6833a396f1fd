//! Auto-advance scheduler adapters.

mod tokio_advance_scheduler;

pub use tokio_advance_scheduler::TokioAdvanceScheduler;

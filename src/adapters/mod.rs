//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `catalog` - Catalog sources (JSON/YAML file, in-memory)
//! - `scheduler` - Deferred auto-advance on the tokio runtime
//! - `terminal` - Line-based front-end (command parsing, rendering)

pub mod catalog;
pub mod scheduler;
pub mod terminal;

pub use catalog::{CatalogFormat, FileCatalogSource, InMemoryCatalogSource};
pub use scheduler::TokioAdvanceScheduler;
pub use terminal::{CommandError, TerminalCommand};

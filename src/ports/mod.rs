//! Ports - Interfaces between the wizard core and the outside world.
//!
//! - `CatalogSource` - where the catalog comes from
//! - `AdvanceScheduler` - how the auto-advance delay is scheduled

mod advance_scheduler;
mod catalog_source;

pub use advance_scheduler::{AdvanceScheduler, AdvanceTask};
pub use catalog_source::{CatalogError, CatalogSource};

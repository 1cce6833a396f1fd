//! Terminal front-end.
//!
//! Parses input lines into [`TerminalCommand`]s and renders snapshots as
//! plain text. The event loop itself lives in the binary.

mod command;
mod render;

pub use command::{CommandError, TerminalCommand};
pub use render::{render_question, render_results, render_snapshot, HELP};

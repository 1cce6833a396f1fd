//! Selection module - answers and navigation history for one session.

mod answer;
mod history;

pub use answer::{Answer, SelectionState, ALL_SENTINEL, ANY_SENTINEL};
pub use history::QuestionHistory;

//! Plain-text rendering of wizard snapshots.

use std::fmt::Write;

use crate::domain::catalog::Item;
use crate::domain::wizard::{QuestionView, WizardSnapshot};

pub const HELP: &str = "\
Commands:
  <number>      choose an option (comma-separate several for multi-select)
  <value>       type an option value directly
  n, next      continue to the next question
  b, back      go back one question
  r, restart   start over
  h, help      show this help
  q, quit      leave the wizard";

/// The active question, or a short status line when there is none.
pub fn render_snapshot(snapshot: &WizardSnapshot) -> String {
    let mut out = String::new();
    let matching = snapshot.matching_item_ids.len();

    match &snapshot.active_question {
        Some(view) => {
            let _ = writeln!(out, "{}", render_question(view));
            let _ = write!(out, "{matching} product(s) match so far");
            if view.multi_select {
                out.push_str(". Toggle options, then type n to continue.");
            } else if snapshot.should_stop {
                out.push_str(". Type n to see results.");
            }
        }
        None => {
            let _ = write!(out, "{matching} product(s) match.");
        }
    }
    out
}

/// Numbered options with availability and selection markers.
pub fn render_question(view: &QuestionView) -> String {
    let mut out = String::new();
    let heading = if view.optional {
        format!("{} (optional)", view.key)
    } else {
        view.key.clone()
    };
    let _ = writeln!(out, "{heading}?");

    for (index, option) in view.options.iter().enumerate() {
        let marker = match (view.multi_select, option.selected) {
            (true, true) => "[x] ",
            (true, false) => "[ ] ",
            (false, true) => "* ",
            (false, false) => "  ",
        };
        let suffix = if option.available { "" } else { " (no matches)" };
        let _ = writeln!(out, "  {}. {marker}{}{suffix}", index + 1, option.value);
    }
    out.trim_end().to_string()
}

/// Final result list.
pub fn render_results(items: &[Item]) -> String {
    if items.is_empty() {
        return "No products matched your answers. Type b to go back or r to restart."
            .to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Recommended products:");
    for item in items {
        let _ = writeln!(out, "  - {} (#{})", item.label(), item.id);
    }
    out.push_str("Type b to revise your last answer or r to restart.");
    out
}

//! Parsing of terminal input lines into wizard commands.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::wizard::QuestionView;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// 1-based option numbers, e.g. `2` or `1,3`.
    Choose(Vec<usize>),
    /// A literal option value.
    Text(String),
    Next,
    Back,
    Restart,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("option {0} does not exist")]
    NoSuchOption(usize),

    #[error("this question takes a single option")]
    SingleChoiceOnly,

    #[error("no question is active")]
    NoQuestion,
}

impl FromStr for TerminalCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CommandError::Empty);
        }

        let command = match line.to_ascii_lowercase().as_str() {
            "n" | "next" => TerminalCommand::Next,
            "b" | "back" => TerminalCommand::Back,
            "r" | "restart" => TerminalCommand::Restart,
            "h" | "help" | "?" => TerminalCommand::Help,
            "q" | "quit" | "exit" => TerminalCommand::Quit,
            _ => match parse_indices(line) {
                Some(indices) => TerminalCommand::Choose(indices),
                None => TerminalCommand::Text(line.to_string()),
            },
        };
        Ok(command)
    }
}

impl TerminalCommand {
    /// Option values picked by a `Choose` or `Text` command.
    pub fn chosen_values(&self, view: Option<&QuestionView>) -> Result<Vec<String>, CommandError> {
        let view = view.ok_or(CommandError::NoQuestion)?;
        match self {
            TerminalCommand::Choose(indices) => {
                if indices.len() > 1 && !view.multi_select {
                    return Err(CommandError::SingleChoiceOnly);
                }
                indices
                    .iter()
                    .map(|&index| {
                        index
                            .checked_sub(1)
                            .and_then(|i| view.options.get(i))
                            .map(|option| option.value.clone())
                            .ok_or(CommandError::NoSuchOption(index))
                    })
                    .collect()
            }
            TerminalCommand::Text(text) => Ok(vec![text.clone()]),
            _ => Ok(Vec::new()),
        }
    }
}

fn parse_indices(line: &str) -> Option<Vec<usize>> {
    line.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().ok())
        .collect::<Option<Vec<_>>>()
        .filter(|indices| !indices.is_empty())
}

//! Configuration errors.

use thiserror::Error;

/// A single problem found while validating a machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigProblem {
    #[error("initial state '{state}' is not declared")]
    UnknownInitialState { state: String },

    #[error("state '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("state '{state}' declares event '{event}' more than once")]
    DuplicateEvent { state: String, event: String },

    #[error("state '{state}' has event '{event}' targeting undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// No configuration was supplied
    #[error("Config does not exist")]
    Missing,

    /// A builder was asked for a configuration before `.initial(..)`
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// The configuration document could not be parsed
    #[error("Config could not be parsed: {0}")]
    Parse(String),

    /// The configuration parsed but describes an inconsistent machine.
    /// Every problem found is reported, not just the first.
    #[error("Config is invalid: {}", describe(.problems))]
    Invalid { problems: Vec<ConfigProblem> },
}

impl ConfigError {
    /// Problems carried by an `Invalid` error; empty otherwise.
    pub fn problems(&self) -> &[ConfigProblem] {
        match self {
            Self::Invalid { problems } => problems.as_slice(),
            _ => &[],
        }
    }
}

fn describe(problems: &[ConfigProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

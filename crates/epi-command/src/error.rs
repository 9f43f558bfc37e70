//! Error types for the command layer.

use thiserror::Error;

use epi_core::EpiError;

/// Errors raised while parsing or applying a command line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("command {command:?}: expected {expected} arguments, got {got}")]
    Arity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("command {command:?}: invalid {field} {value:?}")]
    BadArgument {
        command: &'static str,
        field: &'static str,
        value: String,
    },

    /// An engine error (unknown disease, invalid parameters, …) raised while
    /// applying a well-formed command.
    #[error(transparent)]
    Epi(#[from] EpiError),
}

impl CommandError {
    /// `true` for malformed input the script reader may log and skip;
    /// `false` for engine errors that must surface to the caller.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, CommandError::Epi(_))
    }
}

/// Alias for `Result<T, CommandError>`.
pub type CommandResult<T> = Result<T, CommandError>;

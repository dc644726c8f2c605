//! Console front end errors.

use drafts_core::EngineError;

/// Errors that can occur while running a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A known command was given the wrong arguments.
    #[error("malformed {command} command, usage: {usage}")]
    MalformedCommand {
        /// The command keyword.
        command: String,
        /// The expected form of the command.
        usage: &'static str,
    },

    /// A coordinate was not an integer in `0..10`.
    #[error("invalid coordinate: {value}")]
    InvalidCoordinate {
        /// The token that failed to parse.
        value: String,
    },

    /// A move number was not a positive integer.
    #[error("invalid move number: {value}")]
    InvalidIndex {
        /// The token that failed to parse.
        value: String,
    },

    /// A `set` command named an unknown option or gave it a bad value.
    #[error("invalid value for option {name}: {value}")]
    InvalidOption {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The engine rejected a selection or move.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

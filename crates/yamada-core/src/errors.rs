//! Error types for yamada-tools.
//!
//! Every fallible operation in the workspace reports a single
//! `thiserror`-derived enum.

use thiserror::Error;

/// The top-level error type used throughout yamada-tools.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (invalid calendar date, out-of-range arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// Text that could not be parsed into the requested value.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// The offending input.
        input: String,
        /// What the input was supposed to be (e.g. `"ISO date"`).
        expected: &'static str,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Parse`] for `input`.
    pub fn parse(input: impl Into<String>, expected: &'static str) -> Self {
        Error::Parse {
            input: input.into(),
            expected,
        }
    }
}

/// Shorthand `Result` type used throughout yamada-tools.
pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Error types for token resolution.

use thiserror::Error;

/// Errors raised while validating registrations or resolving a token stream.
///
/// Every variant is fatal. Actions and reducers that ran before the failing
/// token are not rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A flag, parser, separator, suffix or indicator has an invalid shape.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// An indicator-prefixed token matched no active flag.
    #[error("Unknown flag '{token}' at position {position}")]
    UnknownFlag { token: String, position: usize },

    /// Not enough tokens followed a space-separated flag.
    #[error("Missing value for '{token}': expected {expected}, found {found}")]
    MissingValue {
        token: String,
        expected: usize,
        found: usize,
    },

    /// An inline flag token did not split into the expected number of values.
    #[error("Malformed value in '{token}': expected {expected} values, found {found}")]
    MalformedValue {
        token: String,
        expected: usize,
        found: usize,
    },

    /// The stream ended before a parser's window was closed.
    #[error("Unterminated parser '{name}' opened at position {position}")]
    UnterminatedParser { name: String, position: usize },
}

impl ResolveError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

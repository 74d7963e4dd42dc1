//! Error types for line decomposition.
//!
//! Every variant of [`MessageParseError`] describes the same outcome: the line
//! could not be reduced to a command and no [`Message`](crate::Message) was
//! produced. The variants only record where the line fell short, which is
//! useful when a caller decides how to treat a misbehaving peer.

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when decomposing a protocol line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Line was empty or contained only whitespace.
    #[error("empty message")]
    EmptyMessage,

    /// Line consisted of a `:` prefix with nothing after it.
    #[error("prefix is not followed by a command")]
    UnterminatedPrefix,

    /// No command token could be extracted from the line.
    #[error("missing command")]
    MissingCommand,
}

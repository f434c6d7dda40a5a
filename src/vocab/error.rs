//! Vocabulary lookup errors.

use thiserror::Error;

/// A token that is not part of a closed vocabulary.
///
/// Only raised by explicit lookups such as parsing a persisted
/// [`EventSource`](super::EventSource). The spec compiler never raises it:
/// unknown condition and operator tokens degrade instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// The token is not a member of the named vocabulary.
    #[error("unknown {kind} token: {token:?}")]
    Unknown { kind: &'static str, token: String },

    /// A numbered tag whose index is out of range (`"round7"`).
    #[error("{kind} index out of range: {index}")]
    OutOfRange { kind: &'static str, index: u8 },
}

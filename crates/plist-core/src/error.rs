//! Error types for property-list operations.

use crate::value::Kind;
use thiserror::Error;

/// Errors raised by `Value` accessors and the encoders.
///
/// `WrongType` is the type-mismatch kind: an operation was invoked on a value
/// whose active case does not support it. `NoSuchKey` and `OutOfRange` are the
/// range kind, raised only by read-only container access (the mutable paths
/// auto-create instead). `Unsupported` is raised by `encode` for value cases
/// neither output grammar can represent (dates).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlistError {
    /// An accessor or container operation was applied to the wrong case.
    #[error("expected {expected}, found {found} value")]
    WrongType {
        expected: &'static str,
        found: Kind,
    },

    /// Read-only dictionary lookup with a key that is not present.
    #[error("dictionary has no key {0:?}")]
    NoSuchKey(String),

    /// Read-only array indexing past the end.
    #[error("index {index} out of range for array of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// The encoder has no representation for this value case.
    #[error("{0} values cannot be encoded")]
    Unsupported(Kind),
}

/// Convenience alias used throughout plist-core.
pub type Result<T> = std::result::Result<T, PlistError>;

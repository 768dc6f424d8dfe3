use thiserror::Error;

/// Errors produced by `Sequence` operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `pop` was called on a sequence with no elements
    #[error("sequence is empty")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the symbolic tree.

use anka_math::InputError;

/// Errors from building a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// Malformed birth date.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

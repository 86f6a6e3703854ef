//! Error types for destiny-matrix evaluation.

use anka_math::InputError;

use crate::slot::Slot;

/// Errors from building a destiny matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// Malformed birth date.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// Slots that could not be filled: a dependency cycle, or a slot no
    /// rule produces.
    #[error("unresolved matrix slots: {0:?}")]
    UnresolvedSlots(Vec<Slot>),

    /// Two rules claim the same slot.
    #[error("slot {0:?} has more than one rule")]
    DuplicateRule(Slot),
}

//! Error types for generation, selection and parsing

use crate::core::Slot;
use thiserror::Error;

/// Rejected generator input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("base strings cannot be empty")]
    EmptyBaseList,
}

/// Rejected selection; the session is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("'{item}' is not a candidate in slot {slot}")]
    UnknownCandidate { slot: Slot, item: String },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown slot '{0}' (expected L1, L2, L3, R1, R2 or R3)")]
pub struct ParseSlotError(pub String);

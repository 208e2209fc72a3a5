//! Core domain types for the chain game
//!
//! Letters, slots and candidate sets. Nothing here knows about generation
//! policy or presentation; every type is plain data with small, testable helpers.

mod candidates;
mod letter;
mod slot;

pub use candidates::CandidateSet;
pub use letter::{ALPHABET_LEN, Letter, LetterCase, LetterSource, RandomLetters};
pub use slot::{Side, Slot, SlotState};

#[cfg(test)]
pub(crate) use letter::ScriptedLetters;

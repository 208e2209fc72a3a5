//! Random string generation
//!
//! Grows candidate strings by adding random letters to base strings or to a
//! fixed anchor, under a bounded attempt budget.

mod extend;
mod rules;

pub use extend::{
    ATTEMPT_FACTOR, GenerationRequest, generate, generate_from_prefix, generate_with_suffix,
};
pub use rules::{CaseRule, Direction};

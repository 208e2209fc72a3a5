//! Bounded random extension of base strings
//!
//! Each base gets at most `count * ATTEMPT_FACTOR` draws. Duplicates are dropped
//! against the whole output, so a result can come back short of the target.
//! That is a normal outcome, not an error.

use super::rules::{CaseRule, Direction};
use crate::core::{CandidateSet, Letter, LetterCase, LetterSource};
use crate::error::GenerateError;
use tracing::trace;

/// Attempts allowed per requested string
pub const ATTEMPT_FACTOR: usize = 3;

/// Parameters for growing a list of base strings
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub bases: &'a [String],
    pub count_per_base: usize,
    pub extra_chars: usize,
    pub direction: Direction,
    pub case_rule: CaseRule,
}

/// Grow every base string by `extra_chars` random letters
///
/// Empty base strings are skipped. Each base contributes at most
/// `count_per_base` new strings and stops after `count_per_base * 3` attempts.
///
/// # Errors
///
/// Returns `GenerateError::EmptyBaseList` if `bases` is empty.
///
/// # Examples
/// ```
/// use wiki_game::core::RandomLetters;
/// use wiki_game::generator::{CaseRule, Direction, GenerationRequest, generate};
///
/// let bases = vec!["qB".to_string()];
/// let request = GenerationRequest {
///     bases: &bases,
///     count_per_base: 3,
///     extra_chars: 1,
///     direction: Direction::Prepend,
///     case_rule: CaseRule::Upper,
/// };
/// let set = generate(&mut RandomLetters::seeded(3), &request).unwrap();
/// assert!(set.len() <= 3);
/// assert!(set.iter().all(|s| s.len() == 3 && s.ends_with("qB")));
/// ```
pub fn generate<S: LetterSource + ?Sized>(
    source: &mut S,
    request: &GenerationRequest<'_>,
) -> Result<CandidateSet, GenerateError> {
    if request.bases.is_empty() {
        return Err(GenerateError::EmptyBaseList);
    }

    let budget = request.count_per_base.saturating_mul(ATTEMPT_FACTOR);
    let mut unique = CandidateSet::new();

    for base in request.bases.iter().filter(|b| !b.is_empty()) {
        let case = request.case_rule.case_for(base);
        let mut generated = 0;
        let mut attempts = 0;

        while generated < request.count_per_base && attempts < budget {
            let candidate = extend(source, base, request.extra_chars, request.direction, case);
            if unique.insert(candidate) {
                generated += 1;
            }
            attempts += 1;
        }

        if generated < request.count_per_base {
            trace!(base = %base, generated, attempts, "attempt budget exhausted");
        }
    }

    Ok(unique)
}

/// Generate up to `count` strings of the form `prefix` + random letters
///
/// The empty prefix is allowed and yields bare random strings.
///
/// # Examples
/// ```
/// use wiki_game::core::RandomLetters;
/// use wiki_game::generator::{CaseRule, generate_from_prefix};
///
/// let set = generate_from_prefix(&mut RandomLetters::seeded(9), 5, "A", 1, CaseRule::MatchBase);
/// assert!(set.iter().all(|s| s.len() == 2 && s.starts_with('A')));
/// ```
pub fn generate_from_prefix<S: LetterSource + ?Sized>(
    source: &mut S,
    count: usize,
    prefix: &str,
    extra_chars: usize,
    case_rule: CaseRule,
) -> CandidateSet {
    generate_around(source, count, prefix, extra_chars, Direction::Append, case_rule)
}

/// Generate up to `count` strings of the form random letters + `suffix`
pub fn generate_with_suffix<S: LetterSource + ?Sized>(
    source: &mut S,
    count: usize,
    suffix: &str,
    extra_chars: usize,
    case_rule: CaseRule,
) -> CandidateSet {
    generate_around(source, count, suffix, extra_chars, Direction::Prepend, case_rule)
}

fn generate_around<S: LetterSource + ?Sized>(
    source: &mut S,
    count: usize,
    anchor: &str,
    extra_chars: usize,
    direction: Direction,
    case_rule: CaseRule,
) -> CandidateSet {
    let budget = count.saturating_mul(ATTEMPT_FACTOR);
    let case = case_rule.case_for(anchor);
    let mut unique = CandidateSet::new();
    let mut attempts = 0;

    while unique.len() < count && attempts < budget {
        unique.insert(extend(source, anchor, extra_chars, direction, case));
        attempts += 1;
    }

    if unique.len() < count {
        trace!(anchor, generated = unique.len(), attempts, "attempt budget exhausted");
    }
    unique
}

fn extend<S: LetterSource + ?Sized>(
    source: &mut S,
    base: &str,
    extra_chars: usize,
    direction: Direction,
    case: LetterCase,
) -> String {
    let mut out = String::with_capacity(base.len() + extra_chars);
    if direction == Direction::Append {
        out.push_str(base);
    }
    for _ in 0..extra_chars {
        out.push(Letter::draw(source).in_case(case));
    }
    if direction == Direction::Prepend {
        out.push_str(base);
    }
    out
}

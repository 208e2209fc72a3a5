//! Terminal set matching

use crate::core::CandidateSet;

/// First string present in both sets
///
/// Scans `left` in stored order and returns the first of its strings that also
/// appears in `right`. An empty side means no match.
///
/// # Examples
/// ```
/// use wiki_game::chain::find_match;
/// use wiki_game::core::CandidateSet;
///
/// let left: CandidateSet = ["AB", "AC"].into_iter().collect();
/// let right: CandidateSet = ["AC", "AB"].into_iter().collect();
/// assert_eq!(find_match(&left, &right), Some("AB"));
/// ```
#[must_use]
pub fn find_match<'a>(left: &'a CandidateSet, right: &CandidateSet) -> Option<&'a str> {
    if right.is_empty() {
        return None;
    }
    left.iter().find(|candidate| right.contains(candidate))
}

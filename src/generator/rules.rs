//! Growth direction and case rules

use crate::core::LetterCase;

/// Where new letters go relative to the base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Append,
    Prepend,
}

/// Case of the letters added to a base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    /// Follow the case of the base's first character
    MatchBase,
    Upper,
    Lower,
}

impl CaseRule {
    /// Resolve the rule for a concrete base string
    ///
    /// An empty base under `MatchBase` resolves to lowercase.
    ///
    /// # Examples
    /// ```
    /// use wiki_game::core::LetterCase;
    /// use wiki_game::generator::CaseRule;
    ///
    /// assert_eq!(CaseRule::MatchBase.case_for("Az"), LetterCase::Upper);
    /// assert_eq!(CaseRule::MatchBase.case_for("qB"), LetterCase::Lower);
    /// assert_eq!(CaseRule::Upper.case_for("qB"), LetterCase::Upper);
    /// ```
    #[must_use]
    pub fn case_for(self, base: &str) -> LetterCase {
        match self {
            Self::MatchBase => base.chars().next().map_or(LetterCase::Lower, LetterCase::of),
            Self::Upper => LetterCase::Upper,
            Self::Lower => LetterCase::Lower,
        }
    }

    /// Parse a rule name
    ///
    /// Supported names: "match-base" (or "match"), "upper", "lower".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "match-base" | "match_base" | "match" => Some(Self::MatchBase),
            "upper" | "uppercase" => Some(Self::Upper),
            "lower" | "lowercase" => Some(Self::Lower),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MatchBase => "match-base",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }
}

//! Game tunables

use crate::core::Side;
use crate::generator::{CaseRule, Direction};

/// Sizes and case rules for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Strings generated for L1 and R3 on a new challenge
    pub anchor_count: usize,
    /// Extensions per selected base when a downstream slot is regenerated
    pub count_per_base: usize,
    /// Letters added per generation step
    pub extra_chars: usize,
    pub left_case: CaseRule,
    pub right_case: CaseRule,
    /// Case of the letters placed before the End letter in R3
    pub end_anchor_case: CaseRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            anchor_count: 6,
            count_per_base: 4,
            extra_chars: 1,
            left_case: CaseRule::MatchBase,
            right_case: CaseRule::Upper,
            end_anchor_case: CaseRule::Lower,
        }
    }
}

impl GameConfig {
    /// How a side grows when one of its slots is regenerated
    #[must_use]
    pub const fn growth(&self, side: Side) -> (Direction, CaseRule) {
        match side {
            Side::Left => (Direction::Append, self.left_case),
            Side::Right => (Direction::Prepend, self.right_case),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_appends_and_right_prepends() {
        let config = GameConfig::default();
        assert_eq!(
            config.growth(Side::Left),
            (Direction::Append, CaseRule::MatchBase)
        );
        assert_eq!(
            config.growth(Side::Right),
            (Direction::Prepend, CaseRule::Upper)
        );
    }
}

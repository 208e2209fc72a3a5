//! The six candidate slots and their transition table
//!
//! Left slots grow from the Start letter inward (L1 → L2 → L3), right slots grow
//! from the End letter inward (R3 → R2 → R1). L3 and R1 are where the chains meet.

use crate::error::ParseSlotError;
use std::fmt;
use std::str::FromStr;

/// Which anchor a slot grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// A candidate slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    L1,
    L2,
    L3,
    R1,
    R2,
    R3,
}

/// Observable state of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Populated,
    Selected,
}

impl Slot {
    /// All slots in display order, left to right
    pub const ALL: [Self; 6] = [Self::L1, Self::L2, Self::L3, Self::R1, Self::R2, Self::R3];

    /// Position in `Slot::ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::L1 => 0,
            Self::L2 => 1,
            Self::L3 => 2,
            Self::R1 => 3,
            Self::R2 => 4,
            Self::R3 => 5,
        }
    }

    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::L1 | Self::L2 | Self::L3 => Side::Left,
            Self::R1 | Self::R2 | Self::R3 => Side::Right,
        }
    }

    /// Generation steps between the slot and its anchor (1 for L1 and R3)
    #[must_use]
    pub const fn depth(self) -> usize {
        match self {
            Self::L1 | Self::R3 => 1,
            Self::L2 | Self::R2 => 2,
            Self::L3 | Self::R1 => 3,
        }
    }

    /// The slot regenerated when this one is selected
    ///
    /// # Examples
    /// ```
    /// use wiki_game::core::Slot;
    ///
    /// assert_eq!(Slot::L1.downstream(), Some(Slot::L2));
    /// assert_eq!(Slot::R3.downstream(), Some(Slot::R2));
    /// assert_eq!(Slot::L3.downstream(), None);
    /// ```
    #[must_use]
    pub const fn downstream(self) -> Option<Self> {
        match self {
            Self::L1 => Some(Self::L2),
            Self::L2 => Some(Self::L3),
            Self::R3 => Some(Self::R2),
            Self::R2 => Some(Self::R1),
            Self::L3 | Self::R1 => None,
        }
    }

    /// The slot whose selection seeds this one, `None` for anchor slots
    #[must_use]
    pub const fn upstream(self) -> Option<Self> {
        match self {
            Self::L2 => Some(Self::L1),
            Self::L3 => Some(Self::L2),
            Self::R2 => Some(Self::R3),
            Self::R1 => Some(Self::R2),
            Self::L1 | Self::R3 => None,
        }
    }

    /// Every slot below this one, nearest first
    pub fn downstream_chain(self) -> impl Iterator<Item = Self> {
        std::iter::successors(self.downstream(), |slot| slot.downstream())
    }

    /// Meeting slots have no downstream neighbour
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.downstream().is_none()
    }

    /// Length of every string in this slot when each step adds `extra_chars`
    #[must_use]
    pub const fn expected_len(self, extra_chars: usize) -> usize {
        1 + self.depth() * extra_chars
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::L3 => "L3",
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::R3 => "R3",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Slot {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSlotError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_display_order() {
        for (i, slot) in Slot::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn chains_move_inward() {
        let left: Vec<Slot> = Slot::L1.downstream_chain().collect();
        assert_eq!(left, vec![Slot::L2, Slot::L3]);

        let right: Vec<Slot> = Slot::R3.downstream_chain().collect();
        assert_eq!(right, vec![Slot::R2, Slot::R1]);

        assert_eq!(Slot::R1.downstream_chain().count(), 0);
    }

    #[test]
    fn upstream_inverts_downstream() {
        for slot in Slot::ALL {
            if let Some(next) = slot.downstream() {
                assert_eq!(next.upstream(), Some(slot));
                assert_eq!(next.side(), slot.side());
            }
        }
    }

    #[test]
    fn terminal_slots_meet() {
        let terminals: Vec<Slot> = Slot::ALL.into_iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminals, vec![Slot::L3, Slot::R1]);
    }

    #[test]
    fn expected_lengths() {
        assert_eq!(Slot::L1.expected_len(1), 2);
        assert_eq!(Slot::R3.expected_len(1), 2);
        assert_eq!(Slot::L3.expected_len(1), 4);
        assert_eq!(Slot::R1.expected_len(2), 7);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("l2".parse::<Slot>(), Ok(Slot::L2));
        assert_eq!(" R3 ".parse::<Slot>(), Ok(Slot::R3));
        assert_eq!(
            "M1".parse::<Slot>(),
            Err(ParseSlotError("M1".to_string()))
        );
    }
}

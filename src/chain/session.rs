//! Selection state machine for one challenge
//!
//! A session owns the Start/End anchors, the six slots and the random source.
//! Every player action is either `reset` (new challenge) or `select(slot, items)`;
//! both leave the session consistent and re-evaluate the meeting slots.

use super::matcher::find_match;
use crate::config::GameConfig;
use crate::core::{CandidateSet, Letter, LetterSource, Slot, SlotState};
use crate::error::SelectError;
use crate::generator::{GenerationRequest, generate, generate_from_prefix, generate_with_suffix};
use std::fmt;
use tracing::debug;

/// Redraws of the End letter before falling back to the letter after Start
pub const MAX_END_REDRAWS: usize = 64;

/// Separator between links of one chain
pub const LINK_SEPARATOR: &str = " - ";
/// Separator where the two chains meet
pub const MEETING_SEPARATOR: &str = " == ";

/// The two chains that met on a shared string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    matched: String,
    left_chain: Vec<String>,
    right_chain: Vec<String>,
}

impl MatchResult {
    #[must_use]
    pub fn matched(&self) -> &str {
        &self.matched
    }

    /// Start letter, selected L1/L2 items, then the matched string
    #[must_use]
    pub fn left_chain(&self) -> &[String] {
        &self.left_chain
    }

    /// Matched string, selected R2/R3 items, then the End letter
    #[must_use]
    pub fn right_chain(&self) -> &[String] {
        &self.right_chain
    }

    /// Render as `A - AZ - AZK - AZKB == AZKB - ZKB - KB - B`
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}{MEETING_SEPARATOR}{}",
            self.left_chain.join(LINK_SEPARATOR),
            self.right_chain.join(LINK_SEPARATOR)
        )
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[derive(Debug, Clone, Default)]
struct SlotData {
    candidates: CandidateSet,
    selected: Vec<String>,
}

/// One challenge: anchors, six slots and an optional match
///
/// # Examples
/// ```
/// use wiki_game::chain::Session;
/// use wiki_game::config::GameConfig;
/// use wiki_game::core::{RandomLetters, Slot};
///
/// let mut session = Session::new(GameConfig::default(), RandomLetters::seeded(11));
/// assert_ne!(session.start(), session.end());
///
/// let first = session.candidates(Slot::L1).get(0).unwrap().to_string();
/// session.select(Slot::L1, [first.as_str()]).unwrap();
/// assert!(session.candidates(Slot::L2).iter().all(|s| s.starts_with(&first)));
/// ```
#[derive(Debug, Clone)]
pub struct Session<S> {
    config: GameConfig,
    source: S,
    start: Letter,
    end: Letter,
    slots: [SlotData; 6],
    matched: Option<MatchResult>,
}

impl<S: LetterSource> Session<S> {
    /// Create a session and immediately start a new challenge
    pub fn new(config: GameConfig, source: S) -> Self {
        let mut session = Self {
            config,
            source,
            start: Letter::default(),
            end: Letter::default(),
            slots: Default::default(),
            matched: None,
        };
        session.reset();
        session
    }

    /// Start a new challenge, discarding every slot and any match
    ///
    /// Draws the Start letter, redraws the End letter until it differs, then
    /// fills L1 from Start and R3 from End. A source that keeps repeating the
    /// Start letter gets the following letter as End after `MAX_END_REDRAWS`.
    pub fn reset(&mut self) {
        let start = Letter::draw(&mut self.source);
        let mut end = Letter::draw(&mut self.source);
        let mut redraws = 0;
        while end == start {
            if redraws == MAX_END_REDRAWS {
                end = start.following();
                debug!(start = %start, "end letter redraws exhausted");
                break;
            }
            end = Letter::draw(&mut self.source);
            redraws += 1;
        }

        self.start = start;
        self.end = end;
        self.slots = Default::default();
        self.matched = None;

        let config = self.config;
        self.slot_mut(Slot::L1).candidates = generate_from_prefix(
            &mut self.source,
            config.anchor_count,
            &start.to_string(),
            config.extra_chars,
            config.left_case,
        );
        self.slot_mut(Slot::R3).candidates = generate_with_suffix(
            &mut self.source,
            config.anchor_count,
            &end.to_string(),
            config.extra_chars,
            config.end_anchor_case,
        );

        debug!(
            start = %start,
            end = %end,
            l1 = self.slot(Slot::L1).candidates.len(),
            r3 = self.slot(Slot::R3).candidates.len(),
            "new challenge"
        );
    }

    /// Replace the selection of `slot` with `items`
    ///
    /// Selecting in a slot with a downstream neighbour regenerates that neighbour
    /// from the selected items and clears every slot beyond it. An empty selection
    /// clears the downstream slots without generating anything. The meeting slots
    /// are evaluated after every accepted call.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::UnknownCandidate` if any item is not offered in
    /// `slot`. A rejected call leaves the session unchanged.
    pub fn select<I, T>(&mut self, slot: Slot, items: I) -> Result<(), SelectError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut selected: Vec<String> = Vec::new();
        for item in items {
            let item = item.as_ref();
            if !self.slot(slot).candidates.contains(item) {
                return Err(SelectError::UnknownCandidate {
                    slot,
                    item: item.to_string(),
                });
            }
            if !selected.iter().any(|s| s == item) {
                selected.push(item.to_string());
            }
        }

        let regenerated = match slot.downstream() {
            Some(next) if !selected.is_empty() => {
                let (direction, case_rule) = self.config.growth(slot.side());
                let request = GenerationRequest {
                    bases: &selected,
                    count_per_base: self.config.count_per_base,
                    extra_chars: self.config.extra_chars,
                    direction,
                    case_rule,
                };
                Some((next, generate(&mut self.source, &request)?))
            }
            _ => None,
        };

        debug!(slot = %slot, items = ?selected, "select");
        self.slot_mut(slot).selected = selected;

        if slot.downstream().is_some() {
            for below in slot.downstream_chain() {
                *self.slot_mut(below) = SlotData::default();
            }
            if let Some((next, candidates)) = regenerated {
                debug!(slot = %next, count = candidates.len(), "regenerated");
                self.slot_mut(next).candidates = candidates;
            }
            self.matched = None;
        }

        self.evaluate();
        Ok(())
    }

    fn evaluate(&mut self) {
        let matched = find_match(
            &self.slot(Slot::L3).candidates,
            &self.slot(Slot::R1).candidates,
        )
        .map(str::to_string);

        self.matched = matched.map(|matched| {
            let result = self.build_result(matched);
            debug!(chain = %result, "chains met");
            result
        });
    }

    fn build_result(&self, matched: String) -> MatchResult {
        let first = |slot: Slot| self.first_selected(slot).map(str::to_string);

        let mut left_chain = vec![self.start.to_string()];
        left_chain.extend(first(Slot::L1));
        left_chain.extend(first(Slot::L2));
        left_chain.push(matched.clone());

        let mut right_chain = vec![matched.clone()];
        right_chain.extend(first(Slot::R2));
        right_chain.extend(first(Slot::R3));
        right_chain.push(self.end.to_string());

        MatchResult {
            matched,
            left_chain,
            right_chain,
        }
    }
}

impl<S> Session<S> {
    #[must_use]
    pub const fn start(&self) -> Letter {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Letter {
        self.end
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn candidates(&self, slot: Slot) -> &CandidateSet {
        &self.slot(slot).candidates
    }

    /// Selected items of a slot, in the order they were chosen
    #[must_use]
    pub fn selected(&self, slot: Slot) -> &[String] {
        &self.slot(slot).selected
    }

    /// The item shown for this slot in a chain
    #[must_use]
    pub fn first_selected(&self, slot: Slot) -> Option<&str> {
        self.slot(slot).selected.first().map(String::as_str)
    }

    #[must_use]
    pub fn slot_state(&self, slot: Slot) -> SlotState {
        let data = self.slot(slot);
        if !data.selected.is_empty() {
            SlotState::Selected
        } else if !data.candidates.is_empty() {
            SlotState::Populated
        } else {
            SlotState::Empty
        }
    }

    #[must_use]
    pub const fn match_result(&self) -> Option<&MatchResult> {
        self.matched.as_ref()
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    fn slot(&self, slot: Slot) -> &SlotData {
        &self.slots[slot.index()]
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotData {
        &mut self.slots[slot.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RandomLetters, ScriptedLetters};
    use crate::error::GenerateError;
    use crate::generator::CaseRule;

    /// One string per step, all uppercase, so a script decides every letter
    fn single_file_config() -> GameConfig {
        GameConfig {
            anchor_count: 1,
            count_per_base: 1,
            extra_chars: 1,
            left_case: CaseRule::MatchBase,
            right_case: CaseRule::Upper,
            end_anchor_case: CaseRule::Upper,
        }
    }

    /// Plays the script A,B then Z,K,K,B,Z,A into a guaranteed meeting on AZKB
    fn meeting_session() -> Session<ScriptedLetters> {
        let mut session = Session::new(single_file_config(), ScriptedLetters::new("ABZKKBZA"));
        session.select(Slot::L1, ["AZ"]).unwrap();
        session.select(Slot::L2, ["AZK"]).unwrap();
        session.select(Slot::R3, ["KB"]).unwrap();
        session.select(Slot::R2, ["ZKB"]).unwrap();
        session
    }

    #[test]
    fn end_letter_is_redrawn_until_distinct() {
        let session = Session::new(GameConfig::default(), ScriptedLetters::new("AABQX"));
        assert_eq!(session.start().upper(), 'A');
        assert_eq!(session.end().upper(), 'B');
    }

    #[test]
    fn constant_source_still_gets_distinct_anchors() {
        let session = Session::new(GameConfig::default(), ScriptedLetters::new("Z"));
        assert_eq!(session.start(), Letter::from_char('Z').unwrap());
        assert_eq!(session.end(), Letter::from_char('A').unwrap());
    }

    #[test]
    fn new_challenge_populates_anchor_slots() {
        let session = Session::new(
            GameConfig {
                anchor_count: 1,
                ..GameConfig::default()
            },
            ScriptedLetters::new("AABQX"),
        );
        assert_eq!(session.candidates(Slot::L1).as_slice(), &["AQ"]);
        assert_eq!(session.candidates(Slot::R3).as_slice(), &["xB"]);
        for slot in [Slot::L2, Slot::L3, Slot::R1, Slot::R2] {
            assert_eq!(session.slot_state(slot), SlotState::Empty);
        }
        assert_eq!(session.slot_state(Slot::L1), SlotState::Populated);
        assert!(!session.is_matched());
    }

    #[test]
    fn anchor_strings_have_expected_shape() {
        let session = Session::new(GameConfig::default(), RandomLetters::seeded(17));
        let start = session.start().upper();
        let end = session.end().upper();

        assert!(!session.candidates(Slot::L1).is_empty());
        for s in session.candidates(Slot::L1).iter() {
            let chars: Vec<char> = s.chars().collect();
            assert_eq!(chars.len(), Slot::L1.expected_len(1));
            assert_eq!(chars[0], start);
            assert!(chars[1].is_ascii_uppercase());
        }

        assert!(!session.candidates(Slot::R3).is_empty());
        for s in session.candidates(Slot::R3).iter() {
            let chars: Vec<char> = s.chars().collect();
            assert_eq!(chars.len(), Slot::R3.expected_len(1));
            assert!(chars[0].is_ascii_lowercase());
            assert_eq!(chars[1], end);
        }
    }

    #[test]
    fn left_selection_appends_in_base_case() {
        let mut session = Session::new(GameConfig::default(), RandomLetters::seeded(3));
        let base = session.candidates(Slot::L1).get(0).unwrap().to_string();

        session.select(Slot::L1, [base.as_str()]).unwrap();

        let l2 = session.candidates(Slot::L2);
        assert!(!l2.is_empty());
        assert!(l2.len() <= session.config().count_per_base);
        for s in l2.iter() {
            assert!(s.starts_with(&base));
            assert_eq!(s.len(), Slot::L2.expected_len(1));
            assert!(s.chars().last().unwrap().is_ascii_uppercase());
        }
        assert_eq!(session.slot_state(Slot::L1), SlotState::Selected);
    }

    #[test]
    fn right_selection_prepends_uppercase() {
        let mut session = Session::new(GameConfig::default(), RandomLetters::seeded(4));
        let base = session.candidates(Slot::R3).get(0).unwrap().to_string();

        session.select(Slot::R3, [base.as_str()]).unwrap();

        let r2 = session.candidates(Slot::R2);
        assert!(!r2.is_empty());
        for s in r2.iter() {
            assert!(s.ends_with(&base));
            assert_eq!(s.len(), Slot::R2.expected_len(1));
            assert!(s.chars().next().unwrap().is_ascii_uppercase());
        }
    }

    #[test]
    fn multi_select_fans_out_to_every_base() {
        let mut session = Session::new(GameConfig::default(), RandomLetters::seeded(8));
        let bases: Vec<String> = session
            .candidates(Slot::L1)
            .iter()
            .take(2)
            .map(str::to_string)
            .collect();
        assert_eq!(bases.len(), 2);

        session.select(Slot::L1, &bases).unwrap();

        let l2 = session.candidates(Slot::L2);
        assert!(l2.len() <= 2 * session.config().count_per_base);
        for base in &bases {
            assert!(l2.iter().any(|s| s.starts_with(base.as_str())));
        }
        assert_eq!(session.selected(Slot::L1), bases.as_slice());
    }

    #[test]
    fn duplicate_items_collapse() {
        let mut session = Session::new(GameConfig::default(), RandomLetters::seeded(8));
        let base = session.candidates(Slot::L1).get(0).unwrap().to_string();
        session
            .select(Slot::L1, [base.as_str(), base.as_str()])
            .unwrap();
        assert_eq!(session.selected(Slot::L1), &[base]);
    }

    #[test]
    fn meeting_chains_render() {
        let session = meeting_session();

        assert_eq!(session.candidates(Slot::L3).as_slice(), &["AZKB"]);
        assert_eq!(session.candidates(Slot::R1).as_slice(), &["AZKB"]);

        let result = session.match_result().expect("chains should meet");
        assert_eq!(result.matched(), "AZKB");
        assert_eq!(result.left_chain(), &["A", "AZ", "AZK", "AZKB"]);
        assert_eq!(result.right_chain(), &["AZKB", "ZKB", "KB", "B"]);
        assert_eq!(result.render(), "A - AZ - AZK - AZKB == AZKB - ZKB - KB - B");
        assert_eq!(result.to_string(), result.render());
    }

    #[test]
    fn chain_uses_first_selected_item() {
        let config = GameConfig {
            anchor_count: 2,
            ..single_file_config()
        };
        let mut session = Session::new(config, ScriptedLetters::new("ABZYKJKQBZA"));
        assert_eq!(session.candidates(Slot::L1).as_slice(), &["AZ", "AY"]);

        session.select(Slot::L1, ["AZ", "AY"]).unwrap();
        assert_eq!(session.candidates(Slot::L2).as_slice(), &["AZK", "AYQ"]);

        session.select(Slot::L2, ["AZK"]).unwrap();
        session.select(Slot::R3, ["KB"]).unwrap();
        session.select(Slot::R2, ["ZKB"]).unwrap();

        let result = session.match_result().expect("chains should meet");
        assert_eq!(result.render(), "A - AZ - AZK - AZKB == AZKB - ZKB - KB - B");
        assert_eq!(session.selected(Slot::L1), &["AZ", "AY"]);
    }

    #[test]
    fn reevaluation_keeps_an_unchanged_match() {
        let mut session = meeting_session();
        let before = session.match_result().cloned().unwrap();
        session.select(Slot::R1, ["AZKB"]).unwrap();
        assert_eq!(session.match_result(), Some(&before));
    }

    #[test]
    fn terminal_selection_does_not_regenerate() {
        let mut session = meeting_session();
        let l3 = session.candidates(Slot::L3).clone();
        session.select(Slot::L3, ["AZKB"]).unwrap();
        assert_eq!(session.candidates(Slot::L3), &l3);
        assert!(session.is_matched());
    }

    #[test]
    fn reselecting_upstream_clears_match_and_deeper_slots() {
        let mut session = meeting_session();
        assert!(session.is_matched());

        session.select(Slot::L1, ["AZ"]).unwrap();

        assert!(!session.is_matched());
        assert_eq!(session.slot_state(Slot::L2), SlotState::Populated);
        assert_eq!(session.slot_state(Slot::L3), SlotState::Empty);
        assert!(session.selected(Slot::L2).is_empty());
        // right side untouched
        assert_eq!(session.slot_state(Slot::R1), SlotState::Populated);
    }

    #[test]
    fn empty_selection_clears_downstream() {
        let mut session = meeting_session();
        session.select(Slot::R3, Vec::<String>::new()).unwrap();

        assert_eq!(session.slot_state(Slot::R3), SlotState::Populated);
        assert_eq!(session.slot_state(Slot::R2), SlotState::Empty);
        assert_eq!(session.slot_state(Slot::R1), SlotState::Empty);
        assert!(!session.is_matched());
    }

    #[test]
    fn unknown_item_is_rejected_without_changes() {
        let mut session = meeting_session();
        let before_l2 = session.candidates(Slot::L2).clone();
        let before_selected = session.selected(Slot::L1).to_vec();

        let err = session.select(Slot::L1, ["AZ", "QQ"]).unwrap_err();

        assert_eq!(
            err,
            SelectError::UnknownCandidate {
                slot: Slot::L1,
                item: "QQ".to_string()
            }
        );
        assert_eq!(session.candidates(Slot::L2), &before_l2);
        assert_eq!(session.selected(Slot::L1), before_selected.as_slice());
        assert!(session.is_matched());
    }

    #[test]
    fn selecting_in_an_empty_slot_is_rejected() {
        let mut session = Session::new(GameConfig::default(), RandomLetters::seeded(2));
        let err = session.select(Slot::L3, ["ABCD"]).unwrap_err();
        assert!(matches!(err, SelectError::UnknownCandidate { slot: Slot::L3, .. }));
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = meeting_session();
        session.reset();
        session.reset();

        assert!(!session.is_matched());
        for slot in Slot::ALL {
            assert!(session.selected(slot).is_empty());
        }
        for slot in [Slot::L2, Slot::L3, Slot::R1, Slot::R2] {
            assert_eq!(session.slot_state(slot), SlotState::Empty);
        }
        assert_ne!(session.start(), session.end());
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let a = Session::new(GameConfig::default(), RandomLetters::seeded(99));
        let b = Session::new(GameConfig::default(), RandomLetters::seeded(99));
        assert_eq!(a.start(), b.start());
        assert_eq!(a.end(), b.end());
        for slot in Slot::ALL {
            assert_eq!(a.candidates(slot), b.candidates(slot));
        }
    }

    #[test]
    fn generate_error_converts() {
        let err: SelectError = GenerateError::EmptyBaseList.into();
        assert_eq!(err.to_string(), "base strings cannot be empty");
    }
}

//! Letters and the random source behind every draw
//!
//! A `Letter` is one of the 26 ASCII letters, stored as an index and rendered in
//! either case. All randomness in the game flows through `LetterSource`, so a
//! session can be driven by a seeded RNG in play and by a fixed script in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Number of letters a source can produce
pub const ALPHABET_LEN: u8 = 26;

/// One of the 26 ASCII letters
///
/// Displays as uppercase. Start and End anchors are always shown this way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from its alphabet index (0 = A, 25 = Z)
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a letter from an ASCII character of either case
    ///
    /// # Examples
    /// ```
    /// use wiki_game::core::Letter;
    ///
    /// let letter = Letter::from_char('q').unwrap();
    /// assert_eq!(letter.upper(), 'Q');
    /// assert!(Letter::from_char('3').is_none());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Draw a random letter from a source
    pub fn draw<S: LetterSource + ?Sized>(source: &mut S) -> Self {
        Self(source.next_index() % ALPHABET_LEN)
    }

    /// The next letter of the alphabet, wrapping Z to A
    #[must_use]
    pub const fn following(self) -> Self {
        Self((self.0 + 1) % ALPHABET_LEN)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn upper(self) -> char {
        (b'A' + self.0) as char
    }

    #[inline]
    #[must_use]
    pub const fn lower(self) -> char {
        (b'a' + self.0) as char
    }

    /// Render the letter in the given case
    #[inline]
    #[must_use]
    pub const fn in_case(self, case: LetterCase) -> char {
        match case {
            LetterCase::Upper => self.upper(),
            LetterCase::Lower => self.lower(),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.upper())
    }
}

/// Case of a generated character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    /// Case of an existing character; anything that is not uppercase counts as lower
    #[must_use]
    pub fn of(c: char) -> Self {
        if c.is_uppercase() {
            Self::Upper
        } else {
            Self::Lower
        }
    }

    /// Check whether a character is a letter of this case
    #[must_use]
    pub const fn matches(self, c: char) -> bool {
        match self {
            Self::Upper => c.is_ascii_uppercase(),
            Self::Lower => c.is_ascii_lowercase(),
        }
    }
}

/// Source of random alphabet indices
///
/// Implementations should return values in `0..ALPHABET_LEN`; larger values are
/// folded into range by `Letter::draw`.
pub trait LetterSource {
    fn next_index(&mut self) -> u8;
}

/// Letter source backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomLetters<R> {
    rng: R,
}

impl<R: Rng> RandomLetters<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomLetters<ChaCha8Rng> {
    /// Deterministic source for a given seed
    ///
    /// # Examples
    /// ```
    /// use wiki_game::core::{Letter, RandomLetters};
    ///
    /// let mut a = RandomLetters::seeded(7);
    /// let mut b = RandomLetters::seeded(7);
    /// assert_eq!(Letter::draw(&mut a), Letter::draw(&mut b));
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> LetterSource for RandomLetters<R> {
    fn next_index(&mut self) -> u8 {
        self.rng.random_range(0..ALPHABET_LEN)
    }
}

/// Replays a fixed sequence of letters, wrapping around at the end
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedLetters {
    script: Vec<u8>,
    position: usize,
}

#[cfg(test)]
impl ScriptedLetters {
    /// Script from a string of letters, e.g. `"AAB"`
    pub(crate) fn new(letters: &str) -> Self {
        let script: Vec<u8> = letters
            .chars()
            .filter_map(Letter::from_char)
            .map(Letter::index)
            .collect();
        assert!(!script.is_empty(), "script must contain at least one letter");
        Self {
            script,
            position: 0,
        }
    }
}

#[cfg(test)]
impl LetterSource for ScriptedLetters {
    fn next_index(&mut self) -> u8 {
        let index = self.script[self.position % self.script.len()];
        self.position += 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn following_wraps_at_z() {
        assert_eq!(Letter::from_char('a').unwrap().following().upper(), 'B');
        assert_eq!(Letter::from_char('Z').unwrap().following().upper(), 'A');
    }

    #[test]
    fn letter_from_index_bounds() {
        assert_eq!(Letter::from_index(0).map(Letter::upper), Some('A'));
        assert_eq!(Letter::from_index(25).map(Letter::upper), Some('Z'));
        assert!(Letter::from_index(26).is_none());
    }

    #[test]
    fn letter_from_char_normalizes_case() {
        assert_eq!(Letter::from_char('b'), Letter::from_char('B'));
        assert!(Letter::from_char('-').is_none());
        assert!(Letter::from_char('é').is_none());
    }

    #[test]
    fn letter_renders_both_cases() {
        let letter = Letter::from_char('k').unwrap();
        assert_eq!(letter.in_case(LetterCase::Upper), 'K');
        assert_eq!(letter.in_case(LetterCase::Lower), 'k');
        assert_eq!(letter.to_string(), "K");
    }

    #[test]
    fn letter_case_of_non_letters_is_lower() {
        assert_eq!(LetterCase::of('Q'), LetterCase::Upper);
        assert_eq!(LetterCase::of('q'), LetterCase::Lower);
        assert_eq!(LetterCase::of('7'), LetterCase::Lower);
    }

    #[test]
    fn draw_folds_out_of_range_indices() {
        struct Wide;
        impl LetterSource for Wide {
            fn next_index(&mut self) -> u8 {
                27
            }
        }
        assert_eq!(Letter::draw(&mut Wide).upper(), 'B');
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = RandomLetters::seeded(42);
        let mut b = RandomLetters::seeded(42);
        let left: Vec<Letter> = (0..32).map(|_| Letter::draw(&mut a)).collect();
        let right: Vec<Letter> = (0..32).map(|_| Letter::draw(&mut b)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn random_source_stays_in_alphabet() {
        let mut source = RandomLetters::seeded(1);
        for _ in 0..1000 {
            assert!(source.next_index() < ALPHABET_LEN);
        }
    }

    #[test]
    fn scripted_source_wraps_around() {
        let mut source = ScriptedLetters::new("AB");
        let drawn: String = (0..5).map(|_| Letter::draw(&mut source).upper()).collect();
        assert_eq!(drawn, "ABABA");
    }
}

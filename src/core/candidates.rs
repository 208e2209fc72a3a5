//! Insertion-ordered set of candidate strings

use rustc_hash::FxHashSet;

/// Ordered collection of unique strings offered in one slot
///
/// Keeps the order strings were first inserted in; later duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    items: Vec<String>,
    seen: FxHashSet<String>,
}

impl CandidateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string, returning `false` if it was already present
    ///
    /// # Examples
    /// ```
    /// use wiki_game::core::CandidateSet;
    ///
    /// let mut set = CandidateSet::new();
    /// assert!(set.insert("AB".to_string()));
    /// assert!(!set.insert("AB".to_string()));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: String) -> bool {
        if self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.seen.contains(item)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn position(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|s| s == item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.seen.clear();
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

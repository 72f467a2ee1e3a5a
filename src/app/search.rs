//! Incremental search over the current choice list.
//!
//! Search does not filter the list. Each query update moves the cursor to the
//! best matching entry and leaves every row visible, so leaving search mode shows
//! the same list with the cursor on the last match.

use crate::domain::Entry;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// Query state of the search sub-mode.
///
/// Invariant: an inactive search always has an empty query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    active: bool,
    query: String,
}

impl SearchState {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Starts a new search with an empty query.
    ///
    /// Returns `false` if a search is already running.
    pub fn enter(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.query.clear();
        true
    }

    /// Appends `c` to the query if it is a query character.
    pub fn push(&mut self, c: char) -> bool {
        if !self.active || !is_query_char(c) {
            return false;
        }
        self.query.push(c);
        true
    }

    /// Removes the last query character.
    pub fn pop(&mut self) {
        self.query.pop();
    }

    /// Leaves search mode and clears the query.
    pub fn exit(&mut self) {
        self.active = false;
        self.query.clear();
    }
}

/// Characters accepted into a query: ASCII word characters, `.` and `-`.
#[must_use]
pub const fn is_query_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// How a query is matched against entry names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// First entry whose name starts with the query, ignoring case.
    #[default]
    Prefix,
    /// Highest Skim score; the earliest entry wins ties.
    Fuzzy,
}

impl MatchStrategy {
    /// Returns the real index of the matching entry, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use dirpicker::app::MatchStrategy;
    /// use dirpicker::domain::Entry;
    ///
    /// let entries = [Entry::segment("folder1"), Entry::segment("zfolder2")];
    /// assert_eq!(MatchStrategy::Prefix.find("ZF", &entries), Some(1));
    /// assert_eq!(MatchStrategy::Prefix.find("older", &entries), None);
    /// ```
    pub fn find<'a, I>(self, query: &str, entries: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        if query.is_empty() {
            return None;
        }
        let query = query.to_lowercase();

        match self {
            Self::Prefix => entries
                .into_iter()
                .position(|entry| entry.name.to_lowercase().starts_with(&query)),
            Self::Fuzzy => {
                let matcher = SkimMatcherV2::default();
                let mut best: Option<(usize, i64)> = None;

                for (index, entry) in entries.into_iter().enumerate() {
                    let Some(score) = matcher.fuzzy_match(&entry.name.to_lowercase(), &query) else {
                        continue;
                    };
                    if best.map_or(true, |(_, best_score)| score > best_score) {
                        best = Some((index, score));
                    }
                }

                best.map(|(index, _)| index)
            }
        }
    }

    /// Character ranges of `name` matched by `query`, for highlighting.
    ///
    /// Ranges are `(start, end)` character indices with exclusive end. Consecutive
    /// fuzzy match positions are coalesced into a single range.
    #[must_use]
    pub fn highlight_ranges(self, name: &str, query: &str) -> Vec<(usize, usize)> {
        if query.is_empty() {
            return vec![];
        }
        let name_lower = name.to_lowercase();
        let query_lower = query.to_lowercase();

        match self {
            Self::Prefix => {
                if name_lower.starts_with(&query_lower) {
                    vec![(0, query_lower.chars().count())]
                } else {
                    vec![]
                }
            }
            Self::Fuzzy => {
                let matcher = SkimMatcherV2::default();
                let Some((_score, indices)) = matcher.fuzzy_indices(&name_lower, &query_lower)
                else {
                    return vec![];
                };

                let mut ranges: Vec<(usize, usize)> = Vec::new();
                for idx in indices {
                    match ranges.last_mut() {
                        Some((_, end)) if *end == idx => *end = idx + 1,
                        _ => ranges.push((idx, idx + 1)),
                    }
                }
                ranges
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<Entry> {
        names.iter().map(|name| Entry::segment(*name)).collect()
    }

    #[test]
    fn inactive_search_keeps_empty_query() {
        let mut search = SearchState::default();
        assert!(!search.push('a'));
        assert_eq!(search.query(), "");

        assert!(search.enter());
        assert!(!search.enter());
        assert!(search.push('a'));
        search.exit();
        assert!(!search.is_active());
        assert_eq!(search.query(), "");
    }

    #[test]
    fn query_accepts_word_dot_and_hyphen() {
        let mut search = SearchState::default();
        search.enter();
        for c in ['a', 'Z', '9', '_', '.', '-'] {
            assert!(search.push(c), "{c} should be accepted");
        }
        for c in [' ', '/', '*', '~', '\u{e9}', '\u{4e2d}', '\u{661}'] {
            assert!(!search.push(c), "{c} should be rejected");
        }
        assert_eq!(search.query(), "aZ9_.-");
        search.pop();
        assert_eq!(search.query(), "aZ9_.");
    }

    #[test]
    fn prefix_match_picks_first_in_order() {
        let list = entries(&["alpha", "Beta", "beta-2"]);
        assert_eq!(MatchStrategy::Prefix.find("be", &list), Some(1));
        assert_eq!(MatchStrategy::Prefix.find("beta-", &list), Some(2));
        assert_eq!(MatchStrategy::Prefix.find("", &list), None);
    }

    #[test]
    fn fuzzy_match_scores_entries() {
        let list = entries(&["documents", "node_modules", "src"]);
        assert_eq!(MatchStrategy::Fuzzy.find("nodmod", &list), Some(1));
        assert_eq!(MatchStrategy::Fuzzy.find("qqq", &list), None);
    }

    #[test]
    fn prefix_highlight_covers_query() {
        assert_eq!(MatchStrategy::Prefix.highlight_ranges("zfolder2", "ZF"), vec![(0, 2)]);
        assert!(MatchStrategy::Prefix.highlight_ranges("folder1", "zf").is_empty());
    }

    #[test]
    fn fuzzy_highlight_coalesces_runs() {
        let ranges = MatchStrategy::Fuzzy.highlight_ranges("abcdef", "abef");
        assert_eq!(ranges, vec![(0, 2), (4, 6)]);
    }
}

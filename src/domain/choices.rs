//! Ordered choice lists with real-index addressing.
//!
//! A [`ChoiceSet`] interleaves selectable [`Entry`] rows with non-selectable
//! separators. Selection is always expressed as a *real index*: a position in the
//! subsequence of entries, skipping separators. Separators therefore never count
//! toward [`ChoiceSet::real_len`] and can never be selected.
//!
//! Choice sets are immutable once built. Navigation replaces the whole set
//! whenever the current directory changes.

use super::entry::{Choice, Entry};
use serde::{Deserialize, Serialize};

/// Shape of the choice list.
///
/// - **Plain**: one entry per listed name. Back and forward navigation is done
///   with the left/right keys only.
/// - **Guided**: the listed names are followed by a separator and a
///   "choose this directory" entry and, when going back is possible, a
///   separator, a "go back a directory" entry and a trailing separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceLayout {
    #[default]
    Plain,
    Guided,
}

/// An ordered, indexable collection of entries and separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    choices: Vec<Choice>,
    /// Visible positions of the entries, in order.
    real_positions: Vec<usize>,
}

impl ChoiceSet {
    /// Builds a choice set from a directory listing.
    ///
    /// `can_go_back` controls whether the guided layout offers a
    /// "go back a directory" entry. It is ignored by the plain layout.
    ///
    /// # Example
    ///
    /// ```
    /// use dirpicker::domain::{ChoiceLayout, ChoiceSet};
    ///
    /// let names = vec!["a".to_string(), "b".to_string()];
    /// let plain = ChoiceSet::build(names.clone(), ChoiceLayout::Plain, true);
    /// assert_eq!(plain.real_len(), 2);
    ///
    /// let guided = ChoiceSet::build(names, ChoiceLayout::Guided, true);
    /// assert_eq!(guided.real_len(), 4);
    /// assert_eq!(guided.len(), 7);
    /// ```
    #[must_use]
    pub fn build(names: Vec<String>, layout: ChoiceLayout, can_go_back: bool) -> Self {
        let has_names = !names.is_empty();
        let mut choices: Vec<Choice> = names
            .into_iter()
            .map(|name| Choice::Entry(Entry::segment(name)))
            .collect();

        if layout == ChoiceLayout::Guided {
            if has_names {
                choices.push(Choice::Separator);
            }
            choices.push(Choice::Entry(Entry::choose_current()));
            if can_go_back {
                choices.push(Choice::Separator);
                choices.push(Choice::Entry(Entry::go_back()));
                choices.push(Choice::Separator);
            }
        }

        Self::from_choices(choices)
    }

    /// Wraps an arbitrary sequence of choices.
    #[must_use]
    pub fn from_choices(choices: Vec<Choice>) -> Self {
        let real_positions = choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| !choice.is_separator())
            .map(|(position, _)| position)
            .collect();

        Self {
            choices,
            real_positions,
        }
    }

    /// Number of rows, separators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Number of selectable entries.
    #[must_use]
    pub fn real_len(&self) -> usize {
        self.real_positions.len()
    }

    /// Looks up a row by visible position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Choice> {
        self.choices.get(position)
    }

    /// Looks up an entry by real index, ignoring separators.
    #[must_use]
    pub fn get_real(&self, index: usize) -> Option<&Entry> {
        self.real_positions
            .get(index)
            .and_then(|&position| self.choices[position].as_entry())
    }

    /// Visible position of the entry at `index`.
    #[must_use]
    pub fn visible_position(&self, index: usize) -> Option<usize> {
        self.real_positions.get(index).copied()
    }

    /// Iterates over the selectable entries in real-index order.
    pub fn real_entries(&self) -> impl Iterator<Item = &Entry> {
        self.choices.iter().filter_map(Choice::as_entry)
    }

    /// Iterates over every row.
    pub fn iter(&self) -> std::slice::Iter<'_, Choice> {
        self.choices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntryValue;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn plain_layout_has_no_synthetic_entries() {
        let set = ChoiceSet::build(names(&["a", "b"]), ChoiceLayout::Plain, true);
        assert_eq!(set.len(), 2);
        assert_eq!(set.real_len(), 2);
        assert_eq!(set.get_real(1).unwrap().name, "b");
    }

    #[test]
    fn guided_layout_appends_actions() {
        let set = ChoiceSet::build(names(&["a"]), ChoiceLayout::Guided, true);
        let shape: Vec<bool> = set.iter().map(Choice::is_separator).collect();
        assert_eq!(shape, vec![false, true, false, true, false, true]);
        assert_eq!(set.get_real(1).unwrap().value, EntryValue::ChooseCurrent);
        assert_eq!(set.get_real(2).unwrap().value, EntryValue::GoBack);
        assert!(set.get_real(3).is_none());
    }

    #[test]
    fn guided_layout_at_root_omits_go_back() {
        let set = ChoiceSet::build(names(&["a"]), ChoiceLayout::Guided, false);
        assert_eq!(set.real_len(), 2);
        assert!(set.real_entries().all(|entry| entry.value != EntryValue::GoBack));
    }

    #[test]
    fn guided_layout_without_names_skips_leading_separator() {
        let set = ChoiceSet::build(Vec::new(), ChoiceLayout::Guided, false);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_real(0).unwrap().value, EntryValue::ChooseCurrent);
    }

    #[test]
    fn real_index_skips_separators() {
        let set = ChoiceSet::from_choices(vec![
            Choice::Separator,
            Choice::Entry(Entry::segment("x")),
            Choice::Separator,
            Choice::Entry(Entry::segment("y")),
        ]);
        assert_eq!(set.real_len(), 2);
        assert_eq!(set.get_real(1).unwrap().name, "y");
        assert_eq!(set.visible_position(1), Some(3));
        assert_eq!(set.visible_position(2), None);
    }
}

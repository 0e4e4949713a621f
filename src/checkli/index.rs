use crate::model::{Item, ListState};
use std::fmt;
use std::str::FromStr;

/// A user-facing index for an item: the 1-based number printed next to it
/// in the rendered list and typed back into the shell.
///
/// The number always refers to the item's position in the *full* sequence,
/// never to its rank in a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemIndex(usize);

impl ItemIndex {
    /// The index that addresses the item at 0-based `position`.
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The 1-based number the user sees.
    pub fn number(self) -> usize {
        self.0
    }

    /// The 0-based position this index addresses in a list of `len` items,
    /// or `None` when out of range.
    pub fn position(self, len: usize) -> Option<usize> {
        if (1..=len).contains(&self.0) {
            Some(self.0 - 1)
        } else {
            None
        }
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(ItemIndex(n)),
            _ => Err(format!("Invalid index: {} (indexes start at 1)", s)),
        }
    }
}

/// An item that survived filtering, tagged with its position in the full,
/// unfiltered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
    pub index: usize,
    pub item: Item,
}

/// Derives the visible subsequence of `state.items`.
///
/// Two fixed stages, in order:
/// 1. Search: an empty term passes everything through; otherwise only items
///    whose name is exactly equal to the term survive (case-sensitive,
///    whole-string — not a substring match).
/// 2. Hide-checked: when `hide_checked_items` is set, checked items are
///    dropped from the search result.
///
/// Survivors keep their relative order and their original positions.
pub fn visible_items(state: &ListState) -> Vec<VisibleItem> {
    let searched: Vec<VisibleItem> = state
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| state.search_term.is_empty() || item.name == state.search_term)
        .map(|(index, item)| VisibleItem {
            index,
            item: item.clone(),
        })
        .collect();

    if !state.hide_checked_items {
        return searched;
    }

    searched.into_iter().filter(|vi| !vi.item.checked).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::seeded_state;

    #[test]
    fn test_parsing() {
        assert_eq!(ItemIndex::from_str("1"), Ok(ItemIndex(1)));
        assert_eq!(ItemIndex::from_str("42"), Ok(ItemIndex(42)));

        assert!(ItemIndex::from_str("").is_err());
        assert!(ItemIndex::from_str("0").is_err());
        assert!(ItemIndex::from_str("abc").is_err());
        assert!(ItemIndex::from_str("12a").is_err());
        assert!(ItemIndex::from_str("-3").is_err());
    }

    #[test]
    fn test_position_round_trip() {
        let idx = ItemIndex::from_position(3);
        assert_eq!(idx.number(), 4);
        assert_eq!(idx.position(4), Some(3));
        assert_eq!(idx.position(3), None);
        assert_eq!(idx.to_string(), "4");
    }

    #[test]
    fn passes_everything_through_by_default() {
        let state = seeded_state();
        let visible = visible_items(&state);

        assert_eq!(visible.len(), 4);
        for (i, vi) in visible.iter().enumerate() {
            assert_eq!(vi.index, i);
            assert_eq!(vi.item, state.items[i]);
        }
    }

    #[test]
    fn never_mutates_state() {
        let state = seeded_state();
        let before = state.clone();
        let _ = visible_items(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn hide_checked_keeps_original_positions() {
        let mut state = seeded_state();
        state.hide_checked_items = true;

        let visible = visible_items(&state);
        let tagged: Vec<(usize, &str)> = visible
            .iter()
            .map(|vi| (vi.index, vi.item.name.as_str()))
            .collect();

        // milk (position 2) is checked and dropped; bread keeps position 3
        assert_eq!(tagged, vec![(0, "apples"), (1, "oranges"), (3, "bread")]);
    }

    #[test]
    fn search_is_exact_match() {
        let mut state = seeded_state();
        state.search_term = "milk".to_string();

        let visible = visible_items(&state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].index, 2);
        assert_eq!(visible[0].item.name, "milk");

        // substrings and case variants do not match
        state.search_term = "mil".to_string();
        assert!(visible_items(&state).is_empty());
        state.search_term = "Milk".to_string();
        assert!(visible_items(&state).is_empty());
    }

    #[test]
    fn search_then_hide_can_empty_the_view() {
        let mut state = seeded_state();
        state.search_term = "milk".to_string();
        state.hide_checked_items = true;

        // milk survives the search stage but is checked, so stage 2 drops it
        assert!(visible_items(&state).is_empty());
    }

    #[test]
    fn hide_checked_off_is_a_no_op() {
        let mut state = seeded_state();
        state.hide_checked_items = false;
        assert_eq!(visible_items(&state).len(), state.items.len());
    }
}

use chrono::{DateTime, Utc};

/// A single entry on the list.
///
/// Items carry no identifier of their own: an item is addressed by its
/// position in the owning [`ListState::items`] sequence, and deleting an
/// item shifts every later position down by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub checked: bool,
    pub added_at: DateTime<Utc>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
            added_at: Utc::now(),
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// The full mutable state of a session: the item sequence plus the two view
/// filters. Commands write into it directly through a `&mut` handle; nothing
/// is global and nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub items: Vec<Item>,
    pub hide_checked_items: bool,
    pub search_term: String,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state seeded with `items`, filters at their defaults (nothing
    /// hidden, empty search).
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The four-item list the stock configuration seeds a session with:
    /// apples, oranges, milk (checked), bread.
    pub fn seeded_state() -> ListState {
        ListState::with_items(vec![
            Item::new("apples"),
            Item::new("oranges"),
            Item::new("milk").with_checked(true),
            Item::new("bread"),
        ])
    }

    pub fn state_of(names: &[&str]) -> ListState {
        ListState::with_items(names.iter().map(|n| Item::new(*n)).collect())
    }
}

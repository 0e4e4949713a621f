use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemIndex;
use crate::model::{Item, ListState};

/// Appends a new, unchecked item. Names are taken as given: no trimming, no
/// deduplication, and the empty name is allowed.
pub fn run(state: &mut ListState, name: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("adding \"{}\" to the list", name)));

    let item = Item::new(name);
    state.items.push(item.clone());

    let index = ItemIndex::from_position(state.items.len() - 1);
    result.add_message(CmdMessage::success(format!(
        "Item added ({}): {}",
        index, item.name
    )));
    result.affected_items.push(item);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::seeded_state;

    #[test]
    fn appends_unchecked_at_the_end() {
        let mut state = seeded_state();
        let before = state.items.clone();

        run(&mut state, "kale".into()).unwrap();

        assert_eq!(state.items.len(), 5);
        assert_eq!(state.items[4].name, "kale");
        assert!(!state.items[4].checked);
        // prior entries and their positions are untouched
        assert_eq!(&state.items[..4], &before[..]);
    }

    #[test]
    fn accepts_empty_and_duplicate_names() {
        let mut state = ListState::new();
        run(&mut state, "".into()).unwrap();
        run(&mut state, "eggs".into()).unwrap();
        run(&mut state, "eggs".into()).unwrap();

        let names: Vec<&str> = state.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["", "eggs", "eggs"]);
    }

    #[test]
    fn reports_the_new_index() {
        let mut state = seeded_state();
        let result = run(&mut state, "kale".into()).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == "Item added (5): kale"));
    }
}

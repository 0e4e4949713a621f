use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ListState;

/// Overwrites the hide-checked flag.
pub fn set_hide_checked(state: &mut ListState, hide: bool) -> Result<CmdResult> {
    state.hide_checked_items = hide;

    let mut result = CmdResult::default();
    let note = if hide {
        "Checked items hidden."
    } else {
        "Checked items shown."
    };
    result.add_message(CmdMessage::info(note));

    Ok(result)
}

/// Overwrites the search term. The empty string clears the filter.
pub fn set_search_term(state: &mut ListState, term: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let note = if term.is_empty() {
        "Search cleared.".to_string()
    } else {
        format!("Searching for \"{}\".", term)
    };
    state.search_term = term;
    result.add_message(CmdMessage::info(note));

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::seeded_state;

    #[test]
    fn hide_checked_overwrites_the_flag() {
        let mut state = seeded_state();

        set_hide_checked(&mut state, true).unwrap();
        assert!(state.hide_checked_items);

        set_hide_checked(&mut state, true).unwrap();
        assert!(state.hide_checked_items);

        set_hide_checked(&mut state, false).unwrap();
        assert!(!state.hide_checked_items);
    }

    #[test]
    fn search_term_overwrites_and_clears() {
        let mut state = seeded_state();

        set_search_term(&mut state, "milk".into()).unwrap();
        assert_eq!(state.search_term, "milk");

        set_search_term(&mut state, "bread".into()).unwrap();
        assert_eq!(state.search_term, "bread");

        set_search_term(&mut state, String::new()).unwrap();
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn filters_never_touch_the_items() {
        let mut state = seeded_state();
        let items = state.items.clone();

        set_hide_checked(&mut state, true).unwrap();
        set_search_term(&mut state, "milk".into()).unwrap();

        assert_eq!(state.items, items);
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemIndex;
use crate::model::ListState;

use super::helpers::resolve_index;

/// Flips the checked flag of the item at `index`.
pub fn run(state: &mut ListState, index: ItemIndex) -> Result<CmdResult> {
    let position = resolve_index(state, index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "toggling checked state of item {}",
        index
    )));

    let item = &mut state.items[position];
    item.checked = !item.checked;

    let verb = if item.checked { "checked" } else { "unchecked" };
    result.add_message(CmdMessage::success(format!(
        "Item {} ({}): {}",
        verb, index, item.name
    )));
    result.affected_items.push(item.clone());

    Ok(result)
}

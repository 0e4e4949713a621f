use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemIndex;
use crate::model::ListState;

use super::helpers::resolve_index;

/// Overwrites the name of the item at `index`. Renaming to the current name
/// is a successful no-op write; position and checked flag never change.
pub fn run(state: &mut ListState, index: ItemIndex, new_name: String) -> Result<CmdResult> {
    let position = resolve_index(state, index)?;

    let item = &mut state.items[position];
    let old_name = std::mem::replace(&mut item.name, new_name);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item renamed ({}): {} -> {}",
        index, old_name, item.name
    )));
    result.affected_items.push(item.clone());

    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemIndex;
use crate::model::ListState;

use super::helpers::resolve_index;

/// Removes the item at `index`; every later item shifts down one position.
/// An out-of-range index is an error and leaves the list untouched.
pub fn run(state: &mut ListState, index: ItemIndex) -> Result<CmdResult> {
    let position = resolve_index(state, index)?;
    let item = state.items.remove(position);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item deleted ({}): {}",
        index, item.name
    )));
    result.affected_items.push(item);

    Ok(result)
}

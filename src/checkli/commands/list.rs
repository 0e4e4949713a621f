use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::visible_items;
use crate::model::ListState;

/// Read-only: derives the visible subsequence through both filter stages.
pub fn run(state: &ListState) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_items(visible_items(state)))
}

use crate::error::{CheckliError, Result};
use crate::index::ItemIndex;
use crate::model::ListState;

/// Resolves a display index against the current list, yielding the 0-based
/// position it addresses.
pub fn resolve_index(state: &ListState, index: ItemIndex) -> Result<usize> {
    index
        .position(state.items.len())
        .ok_or(CheckliError::IndexOutOfRange {
            index: index.number(),
            len: state.items.len(),
        })
}

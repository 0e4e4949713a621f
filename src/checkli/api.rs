//! # API Facade
//!
//! The single entry point for all checklist operations, regardless of the UI
//! driving them. The facade owns the session's [`ListState`] and dispatches
//! to the command layer; it holds no business logic and performs no I/O.
//!
//! Mutating methods change state and nothing else — rendering is the
//! caller's separate, explicit step afterwards.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::index::ItemIndex;
use crate::model::ListState;

pub struct ChecklistApi {
    state: ListState,
}

impl ChecklistApi {
    pub fn new(state: ListState) -> Self {
        Self { state }
    }

    /// Read-only view of the session state, for status display.
    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn add_item(&mut self, name: String) -> Result<CmdResult> {
        commands::add::run(&mut self.state, name)
    }

    pub fn delete_item(&mut self, index: ItemIndex) -> Result<CmdResult> {
        commands::delete::run(&mut self.state, index)
    }

    pub fn toggle_item(&mut self, index: ItemIndex) -> Result<CmdResult> {
        commands::toggle::run(&mut self.state, index)
    }

    pub fn rename_item(&mut self, index: ItemIndex, new_name: String) -> Result<CmdResult> {
        commands::rename::run(&mut self.state, index, new_name)
    }

    pub fn set_hide_checked(&mut self, hide: bool) -> Result<CmdResult> {
        commands::filters::set_hide_checked(&mut self.state, hide)
    }

    pub fn set_search_term(&mut self, term: String) -> Result<CmdResult> {
        commands::filters::set_search_term(&mut self.state, term)
    }

    pub fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.state)
    }
}

pub use commands::{CmdMessage, MessageLevel};

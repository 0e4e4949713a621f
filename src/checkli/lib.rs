//! # Checkli Architecture
//!
//! Checkli is a **UI-agnostic checklist library** with an interactive CLI
//! client. The list lives in memory for the length of a session; everything
//! the user sees is derived from that state and redrawn wholesale after each
//! operation.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, shell.rs)                     │
//! │  - Parses flags and input lines, prints output              │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! │  - Runs the read → mutate → render loop                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session's ListState  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over &mut ListState                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State and Views
//!
//! There is no storage backend and no hidden global: [`model::ListState`] is
//! owned by the API facade and passed explicitly into every command. The
//! visible list is recomputed from scratch by [`index::visible_items`] (the
//! search filter, then the hide-checked filter) and rendered by
//! [`render::render_list`]. Items are addressed by their position in the
//! *full* sequence; the view pipeline tags each surviving item with that
//! position so mutations always land on the right item, filters or not.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Core data types (`Item`, `ListState`)
//! - [`index`]: Display indexing and the visible-items pipeline
//! - [`render`]: List rendering to a terminal string
//! - [`config`]: Configuration management (seed items, layout)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod render;

//! # UI Module
//!
//! The interactive selector engine: search, scroll and pick one item from a
//! list, with a detail panel for the highlighted item.
//!
//! ## Components
//!
//! - [`schema`] - how a resource type is searched, listed and described
//! - [`filter`] - case-insensitive substring filtering
//! - [`mod@layout`] - box and column widths for a terminal width
//! - [`App`] - selector state machine (cursor, scroll, query, result)
//! - [`mod@render`] - state to styled lines
//! - [`driver`] - raw-mode event loop around a [`SelectorTerminal`]
//!
//! ## Flow
//!
//! ```text
//! terminal event ─▶ event::translate ─▶ App::handle ─▶ filter / layout
//!                                           │
//!              terminal.draw ◀── render ◀───┘   (until committed/cancelled)
//! ```

pub mod app;
pub mod config;
pub mod driver;
pub mod error;
pub mod event;
pub mod filter;
pub mod layout;
pub mod render;
pub mod schema;
pub mod text;
pub mod theme;

pub use app::{Action, App, AppState, Outcome};
pub use driver::{select, select_with, CrosstermTerminal, SelectOptions, SelectorTerminal};
pub use error::SelectError;
pub use render::render;

//! # Selector Schema
//!
//! A [`Schema`] describes how the selector engine sees one resource type:
//! which fields are searched, which columns make up a list row, what the
//! detail panel shows, and which extra key bindings commit with a named
//! action. The engine never looks at an item directly.
//!
//! Schemas only name *semantic* styles ([`StyleTag`]); the active
//! [`Theme`](crate::ui::theme::Theme) turns those into colors at render time.

use crossterm::event::{KeyCode, KeyModifiers};
use std::borrow::Cow;

/// Minimum width of the flexible column, whatever the terminal size.
pub const MIN_FLEX_WIDTH: usize = 10;

/// Default width reserved for detail panel labels (e.g. `"Private IP:"`).
pub const DEFAULT_DETAIL_LABEL_WIDTH: usize = 14;

/// Semantic style of a cell or detail value.
///
/// `State` and `Provider` are resolved per value by the theme, so a
/// `running` VM and a `stopped` one get different colors from the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Id,
    Name,
    Address,
    Kind,
    Zone,
    Group,
    Muted,
    State,
    Provider,
    Plain,
}

/// One list column.
pub struct Column<T> {
    pub label: &'static str,
    /// Width of a fixed column, or the floor of the flexible one.
    pub min_width: usize,
    pub style: StyleTag,
    pub flexible: bool,
    pub extract: fn(&T) -> String,
}

impl<T> Column<T> {
    pub fn fixed(
        label: &'static str,
        width: usize,
        style: StyleTag,
        extract: fn(&T) -> String,
    ) -> Self {
        Self {
            label,
            min_width: width,
            style,
            flexible: false,
            extract,
        }
    }

    pub fn flexible(label: &'static str, style: StyleTag, extract: fn(&T) -> String) -> Self {
        Self {
            label,
            min_width: MIN_FLEX_WIDTH,
            style,
            flexible: true,
            extract,
        }
    }
}

/// Index of the column that absorbs leftover width.
///
/// The first column marked flexible wins; a schema with none marked gets its
/// last column.
pub fn flexible_index<T>(columns: &[Column<T>]) -> usize {
    columns
        .iter()
        .position(|c| c.flexible)
        .unwrap_or_else(|| columns.len().saturating_sub(1))
}

/// A `label: value` row in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
    pub style: StyleTag,
}

impl DetailField {
    pub fn new(label: &'static str, value: impl Into<String>, style: StyleTag) -> Self {
        Self {
            label,
            value: value.into(),
            style,
        }
    }
}

/// A secondary key that commits the highlighted item with a named action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub tag: &'static str,
    /// Legend text, e.g. `"^S:start"`.
    pub hint: &'static str,
}

impl ActionBinding {
    /// Binding for `Ctrl+<c>`.
    pub const fn ctrl(c: char, tag: &'static str, hint: &'static str) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            tag,
            hint,
        }
    }
}

/// Per-resource-type description consumed by the selector engine.
pub trait Schema {
    type Item;

    /// Plural noun for the status line and the empty placeholder ("VMs").
    fn noun(&self) -> &str;

    /// Detail panel header ("VM Details").
    fn title(&self) -> &str;

    fn columns(&self) -> &[Column<Self::Item>];

    /// Fields matched against the search query, in no particular priority.
    fn search_fields<'a>(&self, item: &'a Self::Item) -> Vec<Cow<'a, str>>;

    fn detail_fields(&self, item: &Self::Item) -> Vec<DetailField>;

    /// Fixed number of value rows in the detail panel.
    fn detail_rows(&self) -> usize;

    fn detail_label_width(&self) -> usize {
        DEFAULT_DETAIL_LABEL_WIDTH
    }

    fn actions(&self) -> &[ActionBinding] {
        &[]
    }

    /// Legend label for Enter.
    fn default_hint(&self) -> &str {
        "select"
    }

    /// Marks the active context/profile; the cursor starts on it.
    fn is_current(&self, _item: &Self::Item) -> bool {
        false
    }
}

//! # Selector State Machine
//!
//! [`App`] owns everything that changes while the operator browses: the
//! search query, the filtered view, the cursor and the scroll window. It is
//! driven one [`SelectorEvent`] at a time and ends in exactly one of two
//! terminal states, committed or cancelled, after which it ignores input.
//!
//! Invariants held after every event:
//!
//! - `filtered` lists indices into `items` in ascending order
//! - `cursor < filtered.len()` when anything matches, `cursor == 0` otherwise
//! - `scroll_offset <= cursor < scroll_offset + list_height`

use crate::ui::error::SelectError;
use crate::ui::event::SelectorEvent;
use crate::ui::filter::filter;
use crate::ui::layout::{layout, BoxLayout, Dimensions};
use crate::ui::schema::Schema;

/// Terminal width assumed until the first resize event arrives.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// What the caller should do with the chosen item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enter: the schema's primary action (connect, select, ...).
    Default,
    /// A schema-declared secondary binding, by tag.
    Named(&'static str),
}

impl Action {
    /// `"default"` for Enter, otherwise the binding's tag.
    pub fn tag(self) -> &'static str {
        match self {
            Action::Default => "default",
            Action::Named(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Browsing,
    Committed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Committed { index: usize, action: Action },
    Cancelled,
}

/// Final result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Committed { item: T, action: Action },
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

pub struct App<S: Schema> {
    schema: S,
    items: Vec<S::Item>,
    filtered: Vec<usize>,
    cursor: usize,
    scroll_offset: usize,
    query: String,
    terminal_width: usize,
    dims: Dimensions,
    layout: BoxLayout,
    result: Option<Resolution>,
}

impl<S: Schema> App<S> {
    /// Build a selector over `items`.
    ///
    /// Fails with [`SelectError::Empty`] when there is nothing to pick. The
    /// cursor starts on the first item the schema marks as current.
    pub fn new(items: Vec<S::Item>, schema: S, dims: Dimensions) -> Result<Self, SelectError> {
        if items.is_empty() {
            return Err(SelectError::Empty {
                noun: schema.noun().to_string(),
            });
        }

        let dims = Dimensions {
            list_height: dims.list_height.max(1),
            ..dims
        };
        let layout = layout(DEFAULT_TERMINAL_WIDTH, schema.columns(), dims);
        let cursor = items
            .iter()
            .position(|item| schema.is_current(item))
            .unwrap_or(0);

        let mut app = Self {
            filtered: (0..items.len()).collect(),
            schema,
            items,
            cursor,
            scroll_offset: 0,
            query: String::new(),
            terminal_width: DEFAULT_TERMINAL_WIDTH,
            dims,
            layout,
            result: None,
        };
        app.scroll_cursor_into_view();
        Ok(app)
    }

    /// Apply one event. Does nothing once a result has been recorded.
    pub fn handle(&mut self, event: SelectorEvent) -> AppState {
        if self.result.is_some() {
            return self.state();
        }

        match event {
            SelectorEvent::Resize(width) => self.resize(width),
            SelectorEvent::Char(c) => self.search_push_char(c),
            SelectorEvent::Backspace => self.search_pop_char(),
            SelectorEvent::MoveUp => self.previous(),
            SelectorEvent::MoveDown => self.next(),
            SelectorEvent::Commit => self.commit(Action::Default),
            SelectorEvent::Action(tag) => self.commit(Action::Named(tag)),
            SelectorEvent::Cancel => self.cancel(),
        }

        self.state()
    }

    pub fn state(&self) -> AppState {
        match self.result {
            None => AppState::Browsing,
            Some(Resolution::Committed { .. }) => AppState::Committed,
            Some(Resolution::Cancelled) => AppState::Cancelled,
        }
    }

    pub fn resize(&mut self, width: usize) {
        if self.result.is_some() {
            return;
        }
        self.terminal_width = width;
        self.layout = layout(width, self.schema.columns(), self.dims);
        tracing::debug!(
            width,
            content_width = self.layout.content_width,
            "selector resized"
        );
    }

    pub fn search_push_char(&mut self, c: char) {
        if self.result.is_some() {
            return;
        }
        self.query.push(c);
        self.refilter();
    }

    pub fn search_pop_char(&mut self) {
        if self.result.is_some() {
            return;
        }
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn previous(&mut self) {
        if self.result.is_some() || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
    }

    pub fn next(&mut self) {
        if self.result.is_some() || self.cursor + 1 >= self.filtered.len() {
            return;
        }
        self.cursor += 1;
        self.scroll_cursor_into_view();
    }

    fn commit(&mut self, action: Action) {
        if self.result.is_some() {
            return;
        }
        let Some(&index) = self.filtered.get(self.cursor) else {
            return;
        };
        tracing::info!(index, ?action, noun = self.schema.noun(), "selection committed");
        self.result = Some(Resolution::Committed { index, action });
    }

    pub fn cancel(&mut self) {
        if self.result.is_some() {
            return;
        }
        tracing::info!(noun = self.schema.noun(), "selection cancelled");
        self.result = Some(Resolution::Cancelled);
    }

    /// Recompute `filtered` after a query edit, keep the cursor in range and
    /// restart the scroll window from the top.
    fn refilter(&mut self) {
        self.filtered = filter(&self.items, &self.query, &self.schema);
        self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
        self.scroll_offset = 0;
        self.scroll_cursor_into_view();
        tracing::debug!(
            query = %self.query,
            matches = self.filtered.len(),
            total = self.items.len(),
            "filter updated"
        );
    }

    fn scroll_cursor_into_view(&mut self) {
        let height = self.dims.list_height;
        if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    /// Matching items in display order.
    pub fn filtered(&self) -> impl Iterator<Item = &S::Item> + '_ {
        self.filtered.iter().map(move |&i| &self.items[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The item under the cursor, if anything matches.
    pub fn selected(&self) -> Option<&S::Item> {
        self.filtered.get(self.cursor).map(|&i| &self.items[i])
    }

    /// `(position in filtered, item)` for the rows inside the scroll window.
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &S::Item)> + '_ {
        self.filtered
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.dims.list_height)
            .map(move |(pos, &i)| (pos, &self.items[i]))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn terminal_width(&self) -> usize {
        self.terminal_width
    }

    pub fn list_height(&self) -> usize {
        self.dims.list_height
    }

    pub fn layout(&self) -> &BoxLayout {
        &self.layout
    }

    /// Consume the selector and hand back the result, or `None` while still
    /// browsing.
    pub fn into_outcome(self) -> Option<Outcome<S::Item>> {
        match self.result? {
            Resolution::Cancelled => Some(Outcome::Cancelled),
            Resolution::Committed { index, action } => {
                let item = self.items.into_iter().nth(index)?;
                Some(Outcome::Committed { item, action })
            }
        }
    }
}

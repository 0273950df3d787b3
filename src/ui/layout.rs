//! # Layout Engine
//!
//! Turns a terminal width and a schema's column list into the box geometry
//! used by the renderer. A list row is laid out as
//!
//! ```text
//! │ > i-0abc1234...  ● running   t3.micro      ap-southeast-1a   web-01      │
//!  ^^^ cursor (3)  ^^ gap (2) between columns            flexible column ^^^
//! ```
//!
//! Fixed columns get their declared width; the single flexible column takes
//! whatever is left so every row fills the box exactly.

use crate::ui::schema::{flexible_index, Column, MIN_FLEX_WIDTH};

/// Width of the row cursor indicator (`" > "`).
pub const CURSOR_WIDTH: usize = 3;

/// Gap between two adjacent columns.
pub const COLUMN_GAP: usize = 2;

/// Columns taken by the left and right border glyphs.
pub const BORDER_WIDTH: usize = 2;

/// Tunable box dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub min_width: usize,
    pub max_width: usize,
    /// Number of list rows shown at once.
    pub list_height: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            min_width: 60,
            max_width: 120,
            list_height: 8,
        }
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxLayout {
    /// Inner width of the box, between the border glyphs.
    pub content_width: usize,
    /// One width per schema column, in schema order.
    pub column_widths: Vec<usize>,
}

impl BoxLayout {
    /// Width of the box including its borders; the status line matches it.
    pub fn outer_width(&self) -> usize {
        self.content_width + BORDER_WIDTH
    }
}

/// Sum of everything in a row except the flexible column.
fn fixed_row_width<T>(columns: &[Column<T>], flex: usize) -> usize {
    let fixed: usize = columns
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != flex)
        .map(|(_, c)| c.min_width)
        .sum();
    CURSOR_WIDTH + fixed + COLUMN_GAP * columns.len().saturating_sub(1)
}

/// Compute the box geometry for `terminal_width`.
///
/// The content width is clamped to `[min_width, max_width]`, then grown if
/// the fixed columns plus the flexible floor would not fit, so the returned
/// column widths always add up to `content_width`.
pub fn layout<T>(terminal_width: usize, columns: &[Column<T>], dims: Dimensions) -> BoxLayout {
    let clamped = terminal_width
        .saturating_sub(BORDER_WIDTH)
        .clamp(dims.min_width, dims.max_width.max(dims.min_width));

    if columns.is_empty() {
        return BoxLayout {
            content_width: clamped,
            column_widths: Vec::new(),
        };
    }

    let flex = flexible_index(columns);
    let fixed = fixed_row_width(columns, flex);
    let flex_floor = columns[flex].min_width.max(MIN_FLEX_WIDTH);

    let flex_width = clamped.saturating_sub(fixed).max(flex_floor);
    let content_width = fixed + flex_width;

    let column_widths = columns
        .iter()
        .enumerate()
        .map(|(i, c)| if i == flex { flex_width } else { c.min_width })
        .collect();

    BoxLayout {
        content_width: content_width.max(clamped),
        column_widths,
    }
}

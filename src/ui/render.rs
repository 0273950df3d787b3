//! # Renderer
//!
//! Projects the selector state into a frame: an ordered list of styled
//! lines. Rendering is a pure function of the [`App`] and the [`Theme`], so
//! frames can be checked in tests without a terminal.
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │ > web-0                                      │  search line
//! │                                              │
//! │ > i-0a1b2c3d  ● running  t3.micro  web-01    │  list_height rows
//! │   i-0e4f5a6b  ○ stopped  t3.micro  web-02    │
//! │                                              │
//! ├──────────────────────────────────────────────┤
//! │ VM Details                                   │  detail panel
//! │ ────────────────────                         │
//! │ ID:           i-0a1b2c3d                     │
//! │                                              │
//! ╰──────────────────────────────────────────────╯
//!   2/5 VMs      [Enter:connect] [^S:start] [Esc:quit]
//! ```
//!
//! Every line inside the box has exactly the box's outer width: the border
//! glyphs are drawn per line, so any mismatch would break the frame.

use crate::ui::app::App;
use crate::ui::layout::COLUMN_GAP;
use crate::ui::schema::Schema;
use crate::ui::text::{display_width, fit, fit_left, truncate};
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const TOP_LEFT: &str = "╭";
pub const TOP_RIGHT: &str = "╮";
pub const BOTTOM_LEFT: &str = "╰";
pub const BOTTOM_RIGHT: &str = "╯";
pub const HORIZONTAL: &str = "─";
pub const VERTICAL: &str = "│";
pub const LEFT_T: &str = "├";
pub const RIGHT_T: &str = "┤";

/// Prompt in front of the search query.
pub const SEARCH_PROMPT: &str = " > ";
pub const CURSOR_MARK: &str = " > ";
pub const CURRENT_MARK: &str = " ● ";
pub const NO_MARK: &str = "   ";

const UNDERLINE_WIDTH: usize = 20;

/// Lines of chrome around the list and detail rows: top edge, search line,
/// two spacers, separator, panel header, underline, trailing blank, bottom
/// edge, status line.
pub const CHROME_LINES: usize = 10;

/// Total number of lines [`render`] produces for `app`.
pub fn frame_height<S: Schema>(app: &App<S>) -> usize {
    CHROME_LINES + app.list_height() + app.schema().detail_rows()
}

/// Render the whole selector.
pub fn render<S: Schema>(app: &App<S>, theme: &Theme) -> Vec<Line<'static>> {
    let width = app.layout().content_width;
    let mut lines = Vec::with_capacity(frame_height(app));

    lines.push(edge(TOP_LEFT, TOP_RIGHT, width, theme));
    lines.push(search_line(app, width, theme));
    lines.push(blank(width, theme));
    render_list(app, theme, &mut lines);
    lines.push(blank(width, theme));
    lines.push(edge(LEFT_T, RIGHT_T, width, theme));
    render_details(app, theme, &mut lines);
    lines.push(edge(BOTTOM_LEFT, BOTTOM_RIGHT, width, theme));
    lines.push(status_line(app, theme));

    lines
}

fn edge(left: &'static str, right: &'static str, width: usize, theme: &Theme) -> Line<'static> {
    let style = theme.border_style();
    Line::from(vec![
        Span::styled(left, style),
        Span::styled(HORIZONTAL.repeat(width), style),
        Span::styled(right, style),
    ])
}

/// Wrap already width-exact content spans in the vertical borders.
fn boxed(content: Vec<Span<'static>>, theme: &Theme) -> Line<'static> {
    let style = theme.border_style();
    let mut spans = Vec::with_capacity(content.len() + 2);
    spans.push(Span::styled(VERTICAL, style));
    spans.extend(content);
    spans.push(Span::styled(VERTICAL, style));
    Line::from(spans)
}

fn blank(width: usize, theme: &Theme) -> Line<'static> {
    boxed(vec![Span::raw(" ".repeat(width))], theme)
}

fn search_line<S: Schema>(app: &App<S>, width: usize, theme: &Theme) -> Line<'static> {
    let prompt_width = display_width(SEARCH_PROMPT);
    // Long queries keep their end visible, where the operator is typing.
    let query = fit_left(app.query(), width.saturating_sub(prompt_width));
    boxed(
        vec![
            Span::styled(SEARCH_PROMPT, theme.accent_style()),
            Span::styled(query, Style::default().fg(theme.label)),
        ],
        theme,
    )
}

fn render_list<S: Schema>(app: &App<S>, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    let width = app.layout().content_width;
    let mut drawn = 0;
    for (pos, item) in app.visible_rows() {
        lines.push(list_row(app, pos, item, theme));
        drawn += 1;
    }
    // Keep the box height constant when few items match.
    for _ in drawn..app.list_height() {
        lines.push(blank(width, theme));
    }
}

fn list_row<S: Schema>(app: &App<S>, pos: usize, item: &S::Item, theme: &Theme) -> Line<'static> {
    let schema = app.schema();
    let columns = schema.columns();
    let widths = &app.layout().column_widths;
    let selected = pos == app.cursor();

    let mut spans = Vec::with_capacity(columns.len() * 2 + 1);
    if selected {
        spans.push(Span::styled(CURSOR_MARK, theme.accent_style()));
    } else if schema.is_current(item) {
        spans.push(Span::styled(CURRENT_MARK, Style::default().fg(theme.running)));
    } else {
        spans.push(Span::raw(NO_MARK));
    }

    let gap = " ".repeat(COLUMN_GAP);
    for (i, (column, &col_width)) in columns.iter().zip(widths).enumerate() {
        if i > 0 {
            spans.push(Span::raw(gap.clone()));
        }
        let text = (column.extract)(item);
        let mut style = theme.style(column.style, &text);
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(fit(&text, col_width), style));
    }

    // The layout already sums to content_width; this only guards schemas
    // whose column list is empty.
    let used: usize = spans.iter().map(Span::width).sum();
    let width = app.layout().content_width;
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }

    boxed(spans, theme)
}

fn render_details<S: Schema>(app: &App<S>, theme: &Theme, lines: &mut Vec<Line<'static>>) {
    let schema = app.schema();
    let width = app.layout().content_width;
    let rows = schema.detail_rows();

    lines.push(boxed(
        vec![Span::styled(
            fit(&format!(" {}", schema.title()), width),
            theme.header_style(),
        )],
        theme,
    ));
    lines.push(boxed(
        vec![Span::styled(
            fit(&format!(" {}", HORIZONTAL.repeat(UNDERLINE_WIDTH)), width),
            theme.muted_style(),
        )],
        theme,
    ));

    let Some(item) = app.selected() else {
        lines.push(boxed(
            vec![Span::styled(
                centered(&format!("No {} found", schema.noun()), width),
                theme.muted_style(),
            )],
            theme,
        ));
        // Placeholder + blanks occupy the same height as a filled panel.
        for _ in 0..rows {
            lines.push(blank(width, theme));
        }
        return;
    };

    let label_width = schema.detail_label_width();
    let value_width = width.saturating_sub(1 + label_width);
    let fields = schema.detail_fields(item);
    for field in fields.iter().take(rows) {
        let label = fit(&format!(" {}", field.label), 1 + label_width);
        let value = fit(&field.value, value_width);
        lines.push(boxed(
            vec![
                Span::styled(label, theme.muted_style()),
                Span::styled(value, theme.style(field.style, &field.value)),
            ],
            theme,
        ));
    }
    for _ in fields.len().min(rows)..rows {
        lines.push(blank(width, theme));
    }
    lines.push(blank(width, theme));
}

fn centered(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let left = (width - display_width(&text)) / 2;
    fit(&format!("{}{}", " ".repeat(left), text), width)
}

/// Key legend, e.g. `[Enter:connect] [^S:start] [^X:stop] [Esc:quit]`.
pub fn key_legend<S: Schema>(schema: &S) -> String {
    let mut parts = vec![format!("[Enter:{}]", schema.default_hint())];
    parts.extend(schema.actions().iter().map(|a| format!("[{}]", a.hint)));
    parts.push("[Esc:quit]".to_string());
    parts.join(" ")
}

fn status_line<S: Schema>(app: &App<S>, theme: &Theme) -> Line<'static> {
    let outer = app.layout().outer_width();
    let count = truncate(
        &format!(
            "  {}/{} {}",
            app.filtered_len(),
            app.items().len(),
            app.schema().noun()
        ),
        outer,
    );
    let count_width = display_width(&count);
    let hints = truncate(&key_legend(app.schema()), outer - count_width);
    let padding = outer - count_width - display_width(&hints);

    Line::from(vec![
        Span::raw(count),
        Span::raw(" ".repeat(padding)),
        Span::styled(hints, theme.hint_style()),
    ])
}

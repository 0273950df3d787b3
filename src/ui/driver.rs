//! # Event Loop Driver
//!
//! Runs one selection session: switch the terminal into raw/alternate-screen
//! mode, draw, then block on one event at a time until the state machine
//! commits or cancels. The terminal is always restored before returning,
//! whether the session ended normally or with an error.
//!
//! The terminal itself sits behind [`SelectorTerminal`] so the loop can be
//! driven by a scripted fake in tests.

use crate::ui::app::{App, AppState, Outcome};
use crate::ui::error::SelectError;
use crate::ui::event::translate;
use crate::ui::layout::Dimensions;
use crate::ui::render::render;
use crate::ui::schema::Schema;
use crate::ui::theme::Theme;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, text::Line, widgets::Paragraph, Terminal};
use std::io::{self, Stderr};

/// The terminal capabilities the selector needs.
pub trait SelectorTerminal {
    /// Acquire raw mode and the alternate screen. On error nothing may be
    /// left half-acquired.
    fn enter(&mut self) -> io::Result<()>;

    /// Release whatever [`enter`](Self::enter) acquired. Safe to call twice.
    fn leave(&mut self) -> io::Result<()>;

    /// Current width in columns.
    fn width(&mut self) -> io::Result<u16>;

    /// Block until the next terminal event.
    fn read_event(&mut self) -> io::Result<Event>;

    fn draw(&mut self, frame: &[Line<'static>]) -> io::Result<()>;
}

/// Production terminal: crossterm input, ratatui output on stderr so stdout
/// stays free for whatever the caller prints after a selection.
pub struct CrosstermTerminal {
    terminal: Option<Terminal<CrosstermBackend<Stderr>>>,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { terminal: None }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorTerminal for CrosstermTerminal {
    fn enter(&mut self) -> io::Result<()> {
        if self.terminal.is_some() {
            return Ok(());
        }

        enable_raw_mode()?;
        if let Err(err) = execute!(io::stderr(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        match Terminal::new(CrosstermBackend::new(io::stderr())) {
            Ok(terminal) => {
                self.terminal = Some(terminal);
                Ok(())
            }
            Err(err) => {
                let _ = execute!(io::stderr(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    fn leave(&mut self) -> io::Result<()> {
        let Some(mut terminal) = self.terminal.take() else {
            return Ok(());
        };

        // Attempt every step, report the first failure.
        let raw = disable_raw_mode();
        let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let cursor = terminal.show_cursor();
        raw.and(screen).and(cursor)
    }

    fn width(&mut self) -> io::Result<u16> {
        crossterm::terminal::size().map(|(width, _)| width)
    }

    fn read_event(&mut self) -> io::Result<Event> {
        event::read()
    }

    fn draw(&mut self, frame: &[Line<'static>]) -> io::Result<()> {
        let terminal = self
            .terminal
            .as_mut()
            .ok_or_else(|| io::Error::other("terminal not initialized"))?;
        terminal
            .draw(|f| f.render_widget(Paragraph::new(frame.to_vec()), f.area()))
            .map(|_| ())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Per-invocation settings.
#[derive(Debug, Clone)]
pub struct SelectOptions {
    pub dims: Dimensions,
    pub theme: Theme,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            dims: Dimensions::default(),
            theme: Theme::default_theme().clone(),
        }
    }
}

/// Let the operator pick one of `items` on the real terminal.
pub fn select<S: Schema>(
    items: Vec<S::Item>,
    schema: S,
    options: &SelectOptions,
) -> Result<Outcome<S::Item>, SelectError> {
    let mut terminal = CrosstermTerminal::new();
    select_with(&mut terminal, items, schema, options)
}

/// [`select`] on an injected terminal.
///
/// An empty `items` list fails with [`SelectError::Empty`] before the
/// terminal is entered.
pub fn select_with<S, B>(
    terminal: &mut B,
    items: Vec<S::Item>,
    schema: S,
    options: &SelectOptions,
) -> Result<Outcome<S::Item>, SelectError>
where
    S: Schema,
    B: SelectorTerminal + ?Sized,
{
    let mut app = App::new(items, schema, options.dims)?;

    terminal.enter().map_err(SelectError::TerminalInit)?;
    let run_result = run_app(terminal, &mut app, &options.theme);
    // Restore the terminal whatever happened in the loop.
    let cleanup_result = terminal.leave();

    run_result?;
    cleanup_result.map_err(SelectError::Terminal)?;

    app.into_outcome().ok_or_else(|| {
        SelectError::Terminal(io::Error::other("selector stopped without a result"))
    })
}

fn run_app<S, B>(terminal: &mut B, app: &mut App<S>, theme: &Theme) -> Result<(), SelectError>
where
    S: Schema,
    B: SelectorTerminal + ?Sized,
{
    let width = terminal.width().map_err(SelectError::Terminal)?;
    app.resize(usize::from(width));
    terminal
        .draw(&render(app, theme))
        .map_err(SelectError::Terminal)?;

    loop {
        let event = terminal.read_event().map_err(SelectError::Terminal)?;
        let Some(event) = translate(&event, app.schema().actions()) else {
            continue;
        };

        if app.handle(event) != AppState::Browsing {
            return Ok(());
        }

        terminal
            .draw(&render(app, theme))
            .map_err(SelectError::Terminal)?;
    }
}

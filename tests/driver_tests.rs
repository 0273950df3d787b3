//! Event loop tests
//!
//! Runs whole selection sessions against a scripted terminal: key handling,
//! redraws, outcomes, and terminal restoration on every exit path.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cumulus::resource::{Vm, VmSchema, VmState};
use cumulus::ui::{select_with, Action, Outcome, SelectError, SelectOptions, SelectorTerminal};
use ratatui::text::Line;
use std::collections::{BTreeMap, VecDeque};
use std::io;

/// Terminal that replays a fixed event script and records what it was asked
/// to do.
struct ScriptedTerminal {
    events: VecDeque<Event>,
    width: u16,
    fail_enter: bool,
    entered: usize,
    left: usize,
    frames: Vec<Vec<String>>,
}

impl ScriptedTerminal {
    fn new(events: Vec<Event>) -> Self {
        Self {
            events: VecDeque::from(events),
            width: 102,
            fail_enter: false,
            entered: 0,
            left: 0,
            frames: Vec::new(),
        }
    }

    fn last_frame(&self) -> &[String] {
        self.frames.last().map(Vec::as_slice).unwrap_or_default()
    }
}

impl SelectorTerminal for ScriptedTerminal {
    fn enter(&mut self) -> io::Result<()> {
        if self.fail_enter {
            return Err(io::Error::other("not a tty"));
        }
        self.entered += 1;
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.left += 1;
        Ok(())
    }

    fn width(&mut self) -> io::Result<u16> {
        Ok(self.width)
    }

    fn read_event(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn draw(&mut self, frame: &[Line<'static>]) -> io::Result<()> {
        self.frames.push(
            frame
                .iter()
                .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
                .collect(),
        );
        Ok(())
    }
}

/// Helper to create a key press
fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

fn vms(count: usize) -> Vec<Vm> {
    (1..=count)
        .map(|n| Vm {
            id: format!("i-{n:04}"),
            name: format!("web-{n:02}"),
            state: VmState::Running,
            private_ip: format!("10.0.1.{n}"),
            public_ip: String::new(),
            machine_type: "t3.micro".to_string(),
            zone: "us-east-1a".to_string(),
            tags: BTreeMap::new(),
            launched_at: None,
            provider: "aws".to_string(),
            asg: String::new(),
        })
        .collect()
}

fn run(terminal: &mut ScriptedTerminal, count: usize) -> Result<Outcome<Vm>, SelectError> {
    select_with(terminal, vms(count), VmSchema::new(), &SelectOptions::default())
}

#[test]
fn test_search_then_enter_commits() {
    let mut events = typed("web-03");
    events.push(key(KeyCode::Enter));
    let mut terminal = ScriptedTerminal::new(events);

    let outcome = run(&mut terminal, 5).expect("session");
    match outcome {
        Outcome::Committed { item, action } => {
            assert_eq!(item.name, "web-03");
            assert_eq!(action, Action::Default);
        }
        Outcome::Cancelled => panic!("expected a commit"),
    }

    // Initial frame plus one per keystroke; the commit itself is not drawn.
    assert_eq!(terminal.frames.len(), 7);
    assert_eq!(terminal.entered, 1);
    assert_eq!(terminal.left, 1);
}

#[test]
fn test_ctrl_s_commits_start_action() {
    let mut terminal =
        ScriptedTerminal::new(vec![key(KeyCode::Down), key(KeyCode::Down), ctrl('s')]);
    match run(&mut terminal, 5).expect("session") {
        Outcome::Committed { item, action } => {
            assert_eq!(item.id, "i-0003");
            assert_eq!(action, Action::Named("start"));
        }
        Outcome::Cancelled => panic!("expected a commit"),
    }
    // Ctrl+S never reaches the search box.
    assert!(terminal.last_frame()[1].starts_with("│ >    "));
}

#[test]
fn test_ctrl_x_commits_stop_action() {
    let mut terminal = ScriptedTerminal::new(vec![ctrl('x')]);
    match run(&mut terminal, 2).expect("session") {
        Outcome::Committed { action, .. } => assert_eq!(action, Action::Named("stop")),
        Outcome::Cancelled => panic!("expected a commit"),
    }
}

#[test]
fn test_escape_cancels() {
    let mut terminal = ScriptedTerminal::new(vec![key(KeyCode::Down), key(KeyCode::Esc)]);
    let outcome = run(&mut terminal, 5).expect("session");
    assert!(outcome.is_cancelled());
    assert_eq!(terminal.left, 1);
}

#[test]
fn test_ctrl_c_cancels() {
    let mut terminal = ScriptedTerminal::new(vec![ctrl('c')]);
    assert!(run(&mut terminal, 5).expect("session").is_cancelled());
}

#[test]
fn test_enter_with_no_matches_keeps_browsing() {
    let mut events = typed("nope");
    events.push(key(KeyCode::Enter));
    events.push(key(KeyCode::Esc));
    let mut terminal = ScriptedTerminal::new(events);
    assert!(run(&mut terminal, 5).expect("session").is_cancelled());
    assert!(terminal
        .last_frame()
        .iter()
        .any(|line| line.contains("No VMs found")));
}

#[test]
fn test_key_release_is_ignored() {
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Enter,
        KeyModifiers::empty(),
        KeyEventKind::Release,
    ));
    let mut terminal = ScriptedTerminal::new(vec![release, key(KeyCode::Esc)]);
    assert!(run(&mut terminal, 3).expect("session").is_cancelled());
    // Ignored events do not trigger a redraw.
    assert_eq!(terminal.frames.len(), 1);
}

#[test]
fn test_resize_redraws_at_new_width() {
    let mut terminal = ScriptedTerminal::new(vec![Event::Resize(140, 40), key(KeyCode::Esc)]);
    run(&mut terminal, 3).expect("session");

    assert_eq!(terminal.frames.len(), 2);
    let first_top = terminal.frames[0][0].chars().count();
    let second_top = terminal.frames[1][0].chars().count();
    assert_eq!(first_top, 102);
    assert_eq!(second_top, 122);
}

#[test]
fn test_empty_list_never_touches_terminal() {
    let mut terminal = ScriptedTerminal::new(vec![key(KeyCode::Enter)]);
    let result = select_with(
        &mut terminal,
        Vec::new(),
        VmSchema::new(),
        &SelectOptions::default(),
    );
    assert!(matches!(result, Err(SelectError::Empty { .. })));
    assert_eq!(terminal.entered, 0);
    assert_eq!(terminal.left, 0);
    assert!(terminal.frames.is_empty());
}

#[test]
fn test_failed_enter_is_init_error() {
    let mut terminal = ScriptedTerminal::new(vec![key(KeyCode::Enter)]);
    terminal.fail_enter = true;
    let result = run(&mut terminal, 3);
    assert!(matches!(result, Err(SelectError::TerminalInit(_))));
    assert!(terminal.frames.is_empty());
}

#[test]
fn test_read_error_still_restores_terminal() {
    let mut terminal = ScriptedTerminal::new(typed("web"));
    let result = run(&mut terminal, 3);
    match result {
        Err(SelectError::Terminal(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(terminal.entered, 1);
    assert_eq!(terminal.left, 1);
}

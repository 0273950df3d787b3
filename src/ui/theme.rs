//! # Theme System
//!
//! Provides the color themes for the selector.
//!
//! ## Overview
//!
//! The [`Theme`] struct holds every color the renderer uses. Schemas never
//! name colors; they tag cells with a [`StyleTag`] and the theme resolves
//! the tag (and, for states and providers, the cell's value) to a [`Style`].
//! A theme is chosen once per invocation and passed to the renderer by value.
//!
//! ## Built-in Themes
//!
//! - **Cumulus** (default) - the classic 256-color palette
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette

use crate::ui::schema::StyleTag;
use ratatui::style::{Color, Modifier, Style};

/// All colors used by the selector, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, matched case-insensitively by `--theme`.
    pub name: &'static str,

    // -- Chrome --
    /// Box borders and separators.
    pub border: Color,
    /// Detail panel header.
    pub header: Color,
    /// Cursor indicator and search prompt.
    pub accent: Color,
    /// Key-binding legend.
    pub hint: Color,
    /// Labels, placeholders, secondary text.
    pub muted: Color,

    // -- Cell roles --
    pub id: Color,
    pub label: Color,
    pub address: Color,
    pub kind: Color,
    pub zone: Color,
    pub group: Color,

    // -- Lifecycle states --
    pub running: Color,
    pub pending: Color,
    pub stopped: Color,

    // -- Providers --
    pub aws: Color,
    pub gcp: Color,
}

/// Coarse lifecycle bucket of a state string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Running,
    Pending,
    Stopped,
}

impl StateKind {
    pub fn of(state: &str) -> Self {
        match state.trim().to_ascii_lowercase().as_str() {
            "running" | "active" | "available" | "inservice" | "healthy" => StateKind::Running,
            "pending" | "stopping" | "provisioning" | "active_impaired" | "updating"
            | "starting" => StateKind::Pending,
            _ => StateKind::Stopped,
        }
    }

    /// Glyph shown before a state in the detail panel.
    pub fn indicator(self) -> &'static str {
        match self {
            StateKind::Running => "●",
            StateKind::Pending => "◐",
            StateKind::Stopped => "○",
        }
    }
}

/// `"● running"`, `"◐ pending"`, `"○ stopped"`.
pub fn with_indicator(state: &str) -> String {
    format!("{} {}", StateKind::of(state).indicator(), state)
}

impl Theme {
    /// Return the list of all built-in themes (order = listing order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Cumulus).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint)
    }

    pub fn state_color(&self, state: &str) -> Color {
        match StateKind::of(state) {
            StateKind::Running => self.running,
            StateKind::Pending => self.pending,
            StateKind::Stopped => self.stopped,
        }
    }

    /// Resolve a schema tag to a style. `value` is the raw cell text and only
    /// matters for value-dependent tags.
    pub fn style(&self, tag: StyleTag, value: &str) -> Style {
        let color = match tag {
            StyleTag::Id => self.id,
            StyleTag::Name => self.label,
            StyleTag::Address => self.address,
            StyleTag::Kind => self.kind,
            StyleTag::Zone => self.zone,
            StyleTag::Group => self.group,
            StyleTag::Muted => self.muted,
            StyleTag::State => {
                // Detail values carry an indicator glyph in front of the state.
                let state = value
                    .trim_start_matches(['●', '◐', '○'])
                    .trim();
                self.state_color(state)
            }
            StyleTag::Provider => match value.trim().to_ascii_lowercase().as_str() {
                "aws" => self.aws,
                "gcp" => self.gcp,
                _ => self.muted,
            },
            StyleTag::Plain => return Style::default(),
        };
        Style::default().fg(color)
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Cumulus (default)
    Theme {
        name: "Cumulus",
        border: Color::Indexed(240),
        header: Color::Indexed(252),
        accent: Color::Indexed(81),
        hint: Color::Indexed(245),
        muted: Color::Indexed(240),
        id: Color::Indexed(214),
        label: Color::Indexed(81),
        address: Color::Indexed(252),
        kind: Color::Indexed(252),
        zone: Color::Indexed(252),
        group: Color::Indexed(245),
        running: Color::Indexed(82),
        pending: Color::Indexed(214),
        stopped: Color::Indexed(245),
        aws: Color::Indexed(208),
        gcp: Color::Indexed(33),
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        border: Color::Rgb(108, 112, 134),  // overlay0
        header: Color::Rgb(205, 214, 244),  // text
        accent: Color::Rgb(137, 180, 250),  // blue
        hint: Color::Rgb(147, 153, 178),    // overlay2
        muted: Color::Rgb(108, 112, 134),   // overlay0
        id: Color::Rgb(250, 179, 135),      // peach
        label: Color::Rgb(137, 220, 235),   // sky
        address: Color::Rgb(205, 214, 244), // text
        kind: Color::Rgb(186, 194, 222),    // subtext1
        zone: Color::Rgb(186, 194, 222),    // subtext1
        group: Color::Rgb(147, 153, 178),   // overlay2
        running: Color::Rgb(166, 227, 161), // green
        pending: Color::Rgb(249, 226, 175), // yellow
        stopped: Color::Rgb(127, 132, 156), // overlay1
        aws: Color::Rgb(250, 179, 135),     // peach
        gcp: Color::Rgb(137, 180, 250),     // blue
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        border: Color::Rgb(98, 114, 164),
        header: Color::Rgb(248, 248, 242),
        accent: Color::Rgb(139, 233, 253), // cyan
        hint: Color::Rgb(98, 114, 164),
        muted: Color::Rgb(98, 114, 164),
        id: Color::Rgb(255, 184, 108), // orange
        label: Color::Rgb(139, 233, 253),
        address: Color::Rgb(248, 248, 242),
        kind: Color::Rgb(248, 248, 242),
        zone: Color::Rgb(248, 248, 242),
        group: Color::Rgb(189, 147, 249), // purple
        running: Color::Rgb(80, 250, 123),
        pending: Color::Rgb(241, 250, 140),
        stopped: Color::Rgb(98, 114, 164),
        aws: Color::Rgb(255, 184, 108),
        gcp: Color::Rgb(139, 233, 253),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        border: Color::Rgb(76, 86, 106),
        header: Color::Rgb(236, 239, 244),
        accent: Color::Rgb(136, 192, 208), // frost
        hint: Color::Rgb(129, 161, 193),
        muted: Color::Rgb(76, 86, 106),
        id: Color::Rgb(208, 135, 112), // aurora orange
        label: Color::Rgb(136, 192, 208),
        address: Color::Rgb(216, 222, 233),
        kind: Color::Rgb(216, 222, 233),
        zone: Color::Rgb(216, 222, 233),
        group: Color::Rgb(180, 142, 173),
        running: Color::Rgb(163, 190, 140),
        pending: Color::Rgb(235, 203, 139),
        stopped: Color::Rgb(76, 86, 106),
        aws: Color::Rgb(208, 135, 112),
        gcp: Color::Rgb(129, 161, 193),
    },
];

//! Style tokens for the metrics TUI.
//!
//! Calm palette on a dark terminal: teal accent for values and focus,
//! steel-blue muted text, amber warnings, coral errors.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(64, 224, 208);
const POSITIVE: Color = Color::Rgb(80, 220, 120);
const WARNING: Color = Color::Rgb(255, 180, 60);
const NEGATIVE: Color = Color::Rgb(255, 99, 99);
const NEUTRAL: Color = Color::Rgb(160, 140, 220);
const MUTED: Color = Color::Rgb(110, 140, 180);
const TEXT: Color = Color::Rgb(220, 220, 220);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

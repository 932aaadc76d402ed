//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme. Change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    /// Brand blue from the welcome screen.
    pub const PRIMARY: Color = Color::Rgb(0x21, 0x96, 0xF3);

    // ── text ───────────────────────────────────────────────────
    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn brand_style() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn placeholder_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    // ── inputs & buttons ───────────────────────────────────────
    pub fn input_border_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::PRIMARY)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn button_style(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .bg(Self::PRIMARY)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::Gray)
        }
    }

    // ── lists & tabs ───────────────────────────────────────────
    pub fn selected_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn checkmark_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn active_tab_style() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn inactive_tab_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Parse a `#RRGGBB` accent colour, falling back to gray.
    pub fn accent(hex: &str) -> Color {
        hex.parse().unwrap_or(Color::Gray)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}

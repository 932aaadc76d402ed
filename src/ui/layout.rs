//! Layout helpers: split the terminal area into regions.
//!
//! Rendering and mouse hit-testing both go through these so they always
//! agree on where things are.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: screen body and a bottom status bar.
pub struct AppLayout {
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // screen body (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            body_area: chunks[0],
            status_area: chunks[1],
        }
    }
}

/// Header / form / action-button stack used by the welcome and form screens.
pub struct FormLayout {
    pub header_area: Rect,
    pub fields_area: Rect,
    pub action_area: Rect,
}

impl FormLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // title + subtitle
                Constraint::Min(3),    // inputs
                Constraint::Length(3), // action button
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            fields_area: chunks[1],
            action_area: chunks[2],
        }
    }
}

/// Game selection: header, search box, scrolling list, action button.
pub struct GamesLayout {
    pub header_area: Rect,
    pub search_area: Rect,
    pub list_area: Rect,
    pub action_area: Rect,
}

impl GamesLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            search_area: chunks[1],
            list_area: chunks[2],
            action_area: chunks[3],
        }
    }
}

/// Home: greeting header, tab content, bottom tab bar.
pub struct HomeLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub tab_bar_area: Rect,
}

impl HomeLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3), // tab bar (bordered, one row of tabs)
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            content_area: chunks[1],
            tab_bar_area: chunks[2],
        }
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// `true` if the cell at (`column`, `row`) lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

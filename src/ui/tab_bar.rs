//! Bottom tab bar of the home screen.

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::nav::Tab;
use crate::ui::{layout::contains, theme::Theme};

pub struct TabBar {
    pub active: Tab,
}

fn frame() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_style())
}

/// One equal-width cell per tab inside the bar's border.
fn tab_cells(area: Rect) -> Rc<[Rect]> {
    let inner = frame().inner(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Tab::ALL.map(|_| Constraint::Ratio(1, Tab::ALL.len() as u32)))
        .split(inner)
}

/// Tab under the given cell of a bar drawn at `area`.
pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Tab> {
    tab_cells(area)
        .iter()
        .zip(Tab::ALL)
        .find(|(cell, _)| contains(**cell, column, row))
        .map(|(_, tab)| tab)
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = tab_cells(area);
        frame().render(area, buf);

        for (cell, tab) in cells.iter().zip(Tab::ALL) {
            let style = if tab == self.active {
                Theme::active_tab_style()
            } else {
                Theme::inactive_tab_style()
            };
            Paragraph::new(Line::styled(format!("{} {}", tab.icon(), tab.label()), style))
                .alignment(Alignment::Center)
                .render(*cell, buf);
        }
    }
}

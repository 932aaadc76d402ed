//! Blocking notice popup drawn over the current screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::app::state::Notice;
use crate::ui::layout::centered_fixed;

pub struct NoticePopup<'a> {
    pub notice: &'a Notice,
    /// Key hint for closing, e.g. `"Esc"`.
    pub dismiss_hint: String,
}

impl<'a> Widget for NoticePopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_fixed(40, 7, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.notice.title))
            .title_style(
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                self.notice.message.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(
                format!("{}: OK", self.dismiss_hint),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

//! Scrolling list of (filtered) catalog games with selection checkmarks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::core::catalog::Game;
use crate::core::draft::UserDraft;
use crate::ui::{layout::contains, theme::Theme};

/// Glyph used for games whose icon is an image file.
const FALLBACK_GLYPH: &str = "🎲";

pub struct GameList<'a> {
    pub block: Block<'a>,
    pub games: &'a [&'static Game],
    pub draft: &'a UserDraft,
    pub cursor: usize,
}

/// First visible row so that `cursor` stays on screen.
pub fn scroll_offset(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    cursor.saturating_sub(visible_rows - 1)
}

/// Index of the game drawn under (`column`, `row`) when a list of `len`
/// games is rendered inside `inner` with the given cursor.
pub fn game_index_at(inner: Rect, cursor: usize, len: usize, column: u16, row: u16) -> Option<usize> {
    if !contains(inner, column, row) {
        return None;
    }
    let offset = scroll_offset(cursor, inner.height as usize);
    let idx = offset + (row - inner.y) as usize;
    (idx < len).then_some(idx)
}

fn glyph(game: &Game) -> &'static str {
    if game.icon_is_file() {
        FALLBACK_GLYPH
    } else {
        game.icon
    }
}

impl<'a> Widget for GameList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = self.block.inner(area);
        self.block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.games.is_empty() {
            Paragraph::new(Line::styled("No games match.", Theme::placeholder_style()))
                .render(inner, buf);
            return;
        }

        let rows = inner.height as usize;
        let offset = scroll_offset(self.cursor, rows);

        for (row_idx, (idx, game)) in self
            .games
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let highlighted = idx == self.cursor;
            let selected = self.draft.is_selected(game.id);
            let base = if highlighted {
                Theme::selected_style()
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::styled(if highlighted { "▸ " } else { "  " }, base),
                Span::styled("██ ", Style::default().fg(Theme::accent(game.color))),
                Span::styled(format!("{} ", glyph(game)), base),
                Span::styled(game.name, base),
            ];
            if selected {
                spans.push(Span::styled("  ✓", Theme::checkmark_style()));
            }

            Paragraph::new(Line::from(spans))
                .style(base)
                .render(Rect::new(inner.x, inner.y + row_idx as u16, inner.width, 1), buf);
        }
    }
}

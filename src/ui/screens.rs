//! One layout per onboarding screen.
//!
//! [`draw`] is a pure function of [`AppState`]: it matches exhaustively on
//! the screen (and, on home, the tab) and never mutates anything.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::state::AppState;
use crate::config::Action;
use crate::core::{
    draft::FormField,
    nav::{Screen, Tab},
    Controller,
};
use crate::ui::{
    game_list::GameList,
    layout::{AppLayout, FormLayout, GamesLayout, HomeLayout},
    popup::NoticePopup,
    tab_bar::TabBar,
    theme::Theme,
};

const MASK: char = '•';
const CARET: &str = "▏";

/// Draw the whole frame.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let layout = AppLayout::from_area(frame.area());

    match state.screen() {
        Screen::Welcome => draw_welcome(frame, layout.body_area),
        Screen::Auth => draw_form(
            frame,
            layout.body_area,
            state,
            ("Create Account", "Join the Ludus community"),
            "Next",
        ),
        Screen::Profile => draw_form(
            frame,
            layout.body_area,
            state,
            ("Tell us about yourself", "Help others get to know you"),
            "Next",
        ),
        Screen::GameSelection => draw_games(frame, layout.body_area, state),
        Screen::Home => draw_home(frame, layout.body_area, &state.controller),
    }

    let hint = state.config.status_bar_hint(state.screen());
    frame.render_widget(
        Paragraph::new(hint).style(Theme::status_bar_style()),
        layout.status_area,
    );

    if let Some(notice) = &state.notice {
        frame.render_widget(
            NoticePopup {
                notice,
                dismiss_hint: state.config.short_binding(Action::Dismiss),
            },
            frame.area(),
        );
    }
}

// ───────────────────────────────────────── pieces ────────────

fn header(title: &str, subtitle: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::raw(""),
        Line::styled(title.to_string(), Theme::title_style()),
        Line::styled(subtitle.to_string(), Theme::subtitle_style()),
    ])
    .alignment(Alignment::Center)
}

fn button(label: String, enabled: bool) -> Paragraph<'static> {
    Paragraph::new(Line::raw(label))
        .alignment(Alignment::Center)
        .style(Theme::button_style(enabled))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
}

/// Value as drawn in an input box.
fn display_value(field: FormField, value: &str, mask_secrets: bool) -> String {
    if field.is_secret() && mask_secrets {
        MASK.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

fn input(field: FormField, value: &str, focused: bool, mask_secrets: bool) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if value.is_empty() && !focused {
        spans.push(Span::styled(field.placeholder(), Theme::placeholder_style()));
    } else {
        spans.push(Span::raw(display_value(field, value, mask_secrets)));
    }
    if focused {
        spans.push(Span::styled(CARET, Theme::brand_style()));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" {} ", field.placeholder()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::input_border_style(focused)),
    )
}

/// Narrow centered column so forms don't stretch across wide terminals.
fn column(area: Rect, max_width: u16) -> Rect {
    let w = max_width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, area.height)
}

// ───────────────────────────────────────── screens ───────────

fn draw_welcome(frame: &mut Frame, area: Rect) {
    let area = column(area, 60);
    let layout = FormLayout::from_area(area);

    let body = Paragraph::new(vec![
        Line::raw(""),
        Line::styled("Welcome to", Theme::title_style()),
        Line::styled("Ludus!", Theme::brand_style()),
        Line::raw(""),
        Line::styled(
            "Connect with board game enthusiasts near you",
            Theme::subtitle_style(),
        ),
        Line::raw(""),
        Line::raw("🎲  ♟️  🃏"),
    ])
    .alignment(Alignment::Center);

    let upper = Rect::new(
        area.x,
        area.y,
        area.width,
        layout.action_area.y.saturating_sub(area.y),
    );
    frame.render_widget(body, upper);
    frame.render_widget(button("Get Started".to_string(), true), layout.action_area);
}

fn draw_form(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    (title, subtitle): (&str, &str),
    action: &str,
) {
    let controller = &state.controller;
    let area = column(area, 60);
    let layout = FormLayout::from_area(area);
    frame.render_widget(header(title, subtitle), layout.header_area);

    let fields = controller.screen().form_fields();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fields.iter().map(|_| Constraint::Length(3)))
        .split(layout.fields_area);

    for ((i, &field), row) in fields.iter().enumerate().zip(rows.iter()) {
        let focused = state.field_focus == i;
        frame.render_widget(
            input(
                field,
                controller.draft().field(field),
                focused,
                state.config.mask_password,
            ),
            *row,
        );
    }

    frame.render_widget(
        button(action.to_string(), controller.can_advance()),
        layout.action_area,
    );
}

fn draw_games(frame: &mut Frame, area: Rect, state: &AppState) {
    let controller = &state.controller;
    let area = column(area, 60);
    let layout = GamesLayout::from_area(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled("Choose your favorite games", Theme::title_style()),
            Line::styled("Select games you love to play", Theme::subtitle_style()),
        ])
        .alignment(Alignment::Center),
        layout.header_area,
    );

    let search = controller.search();
    let search_line = if search.is_empty() {
        Line::from(vec![
            Span::styled("Search games...", Theme::placeholder_style()),
            Span::styled(CARET, Theme::brand_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw(search.to_string()),
            Span::styled(CARET, Theme::brand_style()),
        ])
    };
    frame.render_widget(
        Paragraph::new(search_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::input_border_style(true)),
        ),
        layout.search_area,
    );

    let games = controller.filtered_games();
    frame.render_widget(
        GameList {
            block: games_block(),
            games: &games,
            draft: controller.draft(),
            cursor: state.game_cursor,
        },
        layout.list_area,
    );

    frame.render_widget(button(controller.continue_label(), true), layout.action_area);
}

/// Border around the game list (shared with mouse hit-testing).
pub fn games_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_style())
}

/// Game list area for a body drawn at `body_area`.
pub fn games_list_area(body_area: Rect) -> Rect {
    GamesLayout::from_area(column(body_area, 60)).list_area
}

fn draw_home(frame: &mut Frame, area: Rect, controller: &Controller) {
    let layout = HomeLayout::from_area(area);

    frame.render_widget(
        header(
            &format!("Welcome back, {}!", controller.draft().name()),
            "Ready to play some games?",
        ),
        layout.header_area,
    );

    let tab = controller.active_tab();
    let (title, subtitle) = tab.placeholder();
    let mut lines = vec![
        Line::raw(""),
        Line::styled(title, Theme::title_style()),
        Line::styled(subtitle, Theme::subtitle_style()),
    ];
    match tab {
        Tab::Profile => {
            let summary = controller.profile_summary();
            lines.push(Line::raw(""));
            lines.push(Line::raw(format!("Email: {}", summary.email)));
            lines.push(Line::raw(format!("Age: {}", summary.age)));
            lines.push(Line::raw(format!(
                "Favorite Games: {}",
                summary.favorite_count
            )));
        }
        Tab::Home | Tab::Discover | Tab::Create | Tab::Messages => {}
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Theme::border_style()),
            ),
        layout.content_area,
    );

    frame.render_widget(TabBar { active: tab }, layout.tab_bar_area);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::state::Notice;
    use crate::config::AppConfig;
    use crate::core::catalog::GameId;

    fn render(state: &AppState) -> anyhow::Result<String> {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend)?;
        terminal.draw(|frame| draw(frame, state))?;

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let text = buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        Ok(text)
    }

    fn state_at_home() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        let c = &mut state.controller;
        c.advance().expect("welcome");
        c.set_field(FormField::Email, "a@b.com");
        c.set_field(FormField::Password, "secret");
        c.advance().expect("auth");
        c.set_field(FormField::Name, "Ada");
        c.set_field(FormField::Age, "30");
        c.advance().expect("profile");
        for id in [2, 4, 6] {
            c.toggle_game(GameId(id));
        }
        c.advance().expect("games");
        state
    }

    #[test]
    fn test_welcome_screen() -> anyhow::Result<()> {
        let state = AppState::new(AppConfig::default());
        let text = render(&state)?;
        assert!(text.contains("Welcome to"));
        assert!(text.contains("Ludus!"));
        assert!(text.contains("Get Started"));
        assert!(text.contains("Enter: get started"));
        Ok(())
    }

    #[test]
    fn test_password_is_masked() -> anyhow::Result<()> {
        let mut state = AppState::new(AppConfig::default());
        state.controller.advance().expect("welcome");
        state.controller.set_field(FormField::Password, "hunter2");
        let text = render(&state)?;
        assert!(text.contains("Create Account"));
        assert!(text.contains("•••••••"));
        assert!(!text.contains("hunter2"));
        Ok(())
    }

    #[test]
    fn test_game_selection_marks_selected() -> anyhow::Result<()> {
        let mut state = AppState::new(AppConfig::default());
        let c = &mut state.controller;
        c.advance().expect("welcome");
        c.set_field(FormField::Email, "a");
        c.set_field(FormField::Password, "b");
        c.advance().expect("auth");
        c.set_field(FormField::Name, "c");
        c.set_field(FormField::Age, "1");
        c.advance().expect("profile");
        c.toggle_game(GameId(3));
        c.set_search("az");

        let text = render(&state)?;
        assert!(text.contains("Azul"));
        assert!(text.contains("✓"));
        assert!(!text.contains("Chess"));
        assert!(text.contains("Continue (1 selected)"));
        Ok(())
    }

    #[test]
    fn test_profile_tab_projection() -> anyhow::Result<()> {
        let mut state = state_at_home();
        state.controller.set_active_tab(Tab::Profile);
        let text = render(&state)?;
        assert!(text.contains("Email: a@b.com"));
        assert!(text.contains("Age: 30"));
        assert!(text.contains("Favorite Games: 3"));
        assert!(text.contains("Welcome back, Ada!"));
        Ok(())
    }

    #[test]
    fn test_home_tab_view_is_restored() -> anyhow::Result<()> {
        let mut state = state_at_home();
        let home = render(&state)?;
        assert!(home.contains("Game meetups will appear here"));

        state.controller.set_active_tab(Tab::Messages);
        assert!(render(&state)?.contains("Chat with other players"));

        state.controller.set_active_tab(Tab::Home);
        assert_eq!(render(&state)?, home);
        Ok(())
    }

    #[test]
    fn test_notice_overlays_screen() -> anyhow::Result<()> {
        let mut state = AppState::new(AppConfig::default());
        state.controller.advance().expect("welcome");
        state.notice = Some(Notice::error("Please fill in all fields"));
        let text = render(&state)?;
        assert!(text.contains("Error"));
        assert!(text.contains("Please fill in all fields"));
        assert!(text.contains("Esc: OK"));
        Ok(())
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(FormField::Password, "abc", true), "•••");
        assert_eq!(display_value(FormField::Password, "abc", false), "abc");
        assert_eq!(display_value(FormField::Email, "abc", true), "abc");
    }
}

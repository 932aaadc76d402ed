//! Input handling: maps key/mouse events to controller operations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::nav::{Screen, Tab};
use crate::core::FormError;
use crate::ui::{
    game_list::game_index_at,
    layout::{AppLayout, HomeLayout},
    screens::{games_block, games_list_area},
    tab_bar::tab_at,
};

use super::state::{AppState, Notice};

/// Actions meaningful on each screen, in priority order.
fn screen_actions(screen: Screen) -> &'static [Action] {
    match screen {
        Screen::Welcome => &[Action::Submit, Action::Quit],
        Screen::Auth | Screen::Profile => &[
            Action::Submit,
            Action::NextField,
            Action::PrevField,
            Action::Quit,
        ],
        Screen::GameSelection => &[
            Action::Submit,
            Action::ToggleGame,
            Action::CursorUp,
            Action::CursorDown,
            Action::Quit,
        ],
        Screen::Home => &[Action::NextTab, Action::PrevTab, Action::Quit],
    }
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // A pending notice blocks everything else.
    if state.notice.is_some() {
        if state.config.match_key_in(&[Action::Dismiss], key).is_some() {
            state.notice = None;
        }
        return;
    }

    let screen = state.screen();
    if let Some(action) = state.config.match_key_in(screen_actions(screen), key) {
        apply_action(state, action);
        return;
    }

    match screen {
        Screen::Auth | Screen::Profile => edit_field(state, key),
        Screen::GameSelection => edit_search(state, key),
        Screen::Home => {
            if let KeyCode::Char(c @ '1'..='5') = key.code {
                let idx = (c as usize) - ('1' as usize);
                state.controller.set_active_tab(Tab::ALL[idx]);
            }
        }
        Screen::Welcome => {}
    }
}

fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::Submit => submit(state),
        Action::NextField => {
            let n = state.screen().form_fields().len().max(1);
            state.field_focus = (state.field_focus + 1) % n;
        }
        Action::PrevField => {
            let n = state.screen().form_fields().len().max(1);
            state.field_focus = (state.field_focus + n - 1) % n;
        }
        Action::CursorUp => {
            state.game_cursor = state.game_cursor.saturating_sub(1);
        }
        Action::CursorDown => {
            state.game_cursor += 1;
            state.clamp_game_cursor();
        }
        Action::ToggleGame => toggle_highlighted(state),
        Action::NextTab => {
            let tab = state.controller.active_tab().next();
            state.controller.set_active_tab(tab);
        }
        Action::PrevTab => {
            let tab = state.controller.active_tab().prev();
            state.controller.set_active_tab(tab);
        }
        Action::Dismiss => state.notice = None,
        Action::Quit => state.should_quit = true,
    }
}

/// Run the screen's forward action; a guard failure raises a notice.
fn submit(state: &mut AppState) {
    let before = state.screen();
    match state.controller.advance() {
        Ok(after) if after != before => {
            state.field_focus = 0;
            state.game_cursor = 0;
        }
        Ok(_) => {}
        Err(err) => {
            let FormError::Incomplete { screen, missing } = &err;
            tracing::warn!(screen = screen.key(), ?missing, "form incomplete");
            state.notice = Some(Notice::from(&err));
        }
    }
}

fn toggle_highlighted(state: &mut AppState) {
    let games = state.controller.filtered_games();
    if let Some(game) = games.get(state.game_cursor) {
        state.controller.toggle_game(game.id);
    }
}

/// Characters that should be inserted as text (no Ctrl/Alt chord).
fn typed_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn edit_field(state: &mut AppState, key: KeyEvent) {
    let Some(field) = state.focused_field() else {
        return;
    };
    let mut value = state.controller.draft().field(field).to_string();
    if let Some(c) = typed_char(key) {
        value.push(c);
    } else if key.code == KeyCode::Backspace {
        value.pop();
    } else {
        return;
    }
    state.controller.set_field(field, value);
}

fn edit_search(state: &mut AppState, key: KeyEvent) {
    let mut search = state.controller.search().to_string();
    if let Some(c) = typed_char(key) {
        search.push(c);
    } else if key.code == KeyCode::Backspace {
        search.pop();
    } else {
        return;
    }
    state.controller.set_search(search);
    state.game_cursor = 0;
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.  Only left clicks do anything.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.notice.is_some() {
        return;
    }
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };

    let body = AppLayout::from_area(state.terminal_area).body_area;
    match state.screen() {
        Screen::Home => {
            let bar = HomeLayout::from_area(body).tab_bar_area;
            if let Some(tab) = tab_at(bar, mouse.column, mouse.row) {
                state.controller.set_active_tab(tab);
            }
        }
        Screen::GameSelection => {
            let inner = games_block().inner(games_list_area(body));
            let len = state.controller.filtered_games().len();
            if let Some(idx) = game_index_at(inner, state.game_cursor, len, mouse.column, mouse.row)
            {
                state.game_cursor = idx;
                toggle_highlighted(state);
            }
        }
        Screen::Welcome | Screen::Auth | Screen::Profile => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;
    use rstest::rstest;

    use super::*;
    use crate::config::AppConfig;
    use crate::core::{catalog::GameId, draft::FormField};

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        handle_mouse(
            state,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn new_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.terminal_area = Rect::new(0, 0, 80, 24);
        state
    }

    /// Drive the keyboard through the whole flow up to game selection.
    fn to_games(state: &mut AppState) {
        press(state, KeyCode::Enter);
        type_str(state, "a@b.com");
        press(state, KeyCode::Tab);
        type_str(state, "pw");
        press(state, KeyCode::Enter);
        type_str(state, "Ada");
        press(state, KeyCode::Down);
        type_str(state, "30");
        press(state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::GameSelection);
    }

    #[test]
    fn test_keyboard_onboarding() {
        let mut state = new_state();
        to_games(&mut state);

        let draft = state.controller.draft();
        assert_eq!(draft.email(), "a@b.com");
        assert_eq!(draft.password(), "pw");
        assert_eq!(draft.name(), "Ada");
        assert_eq!(draft.age(), "30");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Home);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_incomplete_auth_raises_blocking_notice() {
        let mut state = new_state();
        press(&mut state, KeyCode::Enter);
        type_str(&mut state, "a@b.com");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.screen(), Screen::Auth);
        assert_eq!(
            state.notice,
            Some(Notice::error("Please fill in all fields"))
        );

        // Typing while the notice is up changes nothing.
        type_str(&mut state, "zz");
        assert_eq!(state.controller.draft().email(), "a@b.com");

        press(&mut state, KeyCode::Esc);
        assert!(state.notice.is_none());
        assert!(!state.should_quit);

        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "pw");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.screen(), Screen::Profile);
    }

    #[test]
    fn test_incomplete_profile_stays_put() {
        let mut state = new_state();
        press(&mut state, KeyCode::Enter);
        type_str(&mut state, "a");
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "b");
        press(&mut state, KeyCode::Enter);
        type_str(&mut state, "Ada");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.screen(), Screen::Profile);
        assert!(state.notice.is_some());
        press(&mut state, KeyCode::Enter);
        assert!(state.notice.is_none());
        assert_eq!(state.screen(), Screen::Profile);
    }

    #[test]
    fn test_backspace_and_field_cycling() {
        let mut state = new_state();
        press(&mut state, KeyCode::Enter);
        type_str(&mut state, "abc");
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.controller.draft().email(), "ab");

        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focused_field(), Some(FormField::Password));
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focused_field(), Some(FormField::Email));
    }

    #[test]
    fn test_ctrl_chords_are_not_typed() {
        let mut state = new_state();
        press(&mut state, KeyCode::Enter);
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
        );
        assert_eq!(state.controller.draft().email(), "");

        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
        );
        assert_eq!(state.controller.draft().email(), "A");
    }

    #[test]
    fn test_search_toggle_and_continue_label() {
        let mut state = new_state();
        to_games(&mut state);

        type_str(&mut state, "AZ");
        assert_eq!(state.controller.search(), "AZ");
        press(&mut state, KeyCode::Tab);
        assert!(state.controller.draft().is_selected(GameId(3)));
        assert_eq!(state.controller.continue_label(), "Continue (1 selected)");

        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.controller.filtered_games().len(), 12);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Tab);
        assert!(state.controller.draft().is_selected(GameId(2)));

        // Toggling again deselects.
        press(&mut state, KeyCode::Tab);
        assert!(!state.controller.draft().is_selected(GameId(2)));
    }

    #[test]
    fn test_cursor_is_clamped_to_filtered_list() {
        let mut state = new_state();
        to_games(&mut state);
        for _ in 0..20 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.game_cursor, 11);
        type_str(&mut state, "ch");
        assert_eq!(state.game_cursor, 0);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.game_cursor, 0);
    }

    #[test]
    fn test_toggle_on_empty_filter_is_noop() {
        let mut state = new_state();
        to_games(&mut state);
        type_str(&mut state, "zzz");
        press(&mut state, KeyCode::Tab);
        assert!(state.controller.draft().favorite_games().is_empty());
    }

    #[rstest]
    #[case(KeyCode::Char('1'), Tab::Home)]
    #[case(KeyCode::Char('2'), Tab::Discover)]
    #[case(KeyCode::Char('3'), Tab::Create)]
    #[case(KeyCode::Char('4'), Tab::Messages)]
    #[case(KeyCode::Char('5'), Tab::Profile)]
    #[case(KeyCode::Left, Tab::Profile)]
    #[case(KeyCode::Right, Tab::Discover)]
    fn test_home_tab_keys(#[case] code: KeyCode, #[case] expected: Tab) {
        let mut state = new_state();
        to_games(&mut state);
        press(&mut state, KeyCode::Enter);

        press(&mut state, code);
        assert_eq!(state.controller.active_tab(), expected);
        assert_eq!(state.screen(), Screen::Home);
    }

    #[test]
    fn test_quit_bindings() {
        let mut state = new_state();
        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);

        let mut state = new_state();
        press(&mut state, KeyCode::Enter);
        handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(state.should_quit);
    }

    #[test]
    fn test_click_tab_bar() {
        let mut state = new_state();
        to_games(&mut state);
        press(&mut state, KeyCode::Enter);

        // 80x24 → body 23 rows, tab bar rows 20..23, inner row 21.
        // Inner width 78 split five ways; column 70 is in the last cell.
        click(&mut state, 70, 21);
        assert_eq!(state.controller.active_tab(), Tab::Profile);
        click(&mut state, 2, 21);
        assert_eq!(state.controller.active_tab(), Tab::Home);
    }

    #[test]
    fn test_click_game_row_toggles() {
        let mut state = new_state();
        to_games(&mut state);

        // Body 80x23 → 60-wide column at x=10; list area starts at y=6,
        // first row inside its border at y=7.
        click(&mut state, 20, 7);
        assert_eq!(state.game_cursor, 0);
        assert!(state.controller.draft().is_selected(GameId(1)));

        click(&mut state, 20, 9);
        assert_eq!(state.game_cursor, 2);
        assert!(state.controller.draft().is_selected(GameId(3)));
    }
}

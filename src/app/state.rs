//! Central application state.
//!
//! The onboarding model lives in [`Controller`]; everything else here is
//! terminal-side bookkeeping (input focus, list cursor, pending notice).
//! Rendering takes `&AppState`, event handling takes `&mut AppState`.

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{draft::FormField, nav::Screen, Controller, FormError};

/// A blocking message shown on top of the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

impl From<&FormError> for Notice {
    fn from(err: &FormError) -> Self {
        Notice::error(err.to_string())
    }
}

/// Top-level application state.
pub struct AppState {
    pub controller: Controller,
    /// Index into the current screen's form fields.
    pub field_focus: usize,
    /// Highlighted row in the filtered game list.
    pub game_cursor: usize,
    /// While `Some`, input is swallowed until the notice is dismissed.
    pub notice: Option<Notice>,
    /// Controls the main event loop.
    pub should_quit: bool,
    pub config: AppConfig,
    /// Last known terminal size, used for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            controller: Controller::new(),
            field_focus: 0,
            game_cursor: 0,
            notice: None,
            should_quit: false,
            config,
            terminal_area: Rect::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.controller.screen()
    }

    /// The form field that receives typed characters, if any.
    pub fn focused_field(&self) -> Option<FormField> {
        self.screen().form_fields().get(self.field_focus).copied()
    }

    /// Keep the game cursor inside the filtered list.
    pub fn clamp_game_cursor(&mut self) {
        let len = self.controller.filtered_games().len();
        self.game_cursor = self.game_cursor.min(len.saturating_sub(1));
    }
}

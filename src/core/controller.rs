//! The view controller: screen, draft, search text and active tab.
//!
//! This is the only place the onboarding state changes.  Every operation is
//! synchronous and total except [`Controller::advance`], whose guard can
//! reject an incomplete form without touching any state.

use super::catalog::{self, Game, GameId};
use super::draft::{FormField, UserDraft};
use super::error::FormError;
use super::nav::{Screen, Tab};

/// Read-only projection rendered on the profile tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary<'a> {
    pub email: &'a str,
    pub age: &'a str,
    pub favorite_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    screen: Screen,
    draft: UserDraft,
    search: String,
    active_tab: Tab,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    // ── onboarding ─────────────────────────────────────────────

    /// `true` when the forward action on the current screen would pass its
    /// guard.
    pub fn can_advance(&self) -> bool {
        self.draft.missing(self.screen.form_fields()).is_empty()
    }

    /// Perform the forward action of the current screen ("Get Started",
    /// "Next", "Continue"/"Skip for now") and return the screen now shown.
    ///
    /// Home is absorbing: advancing there is a no-op.
    pub fn advance(&mut self) -> Result<Screen, FormError> {
        let missing = self.draft.missing(self.screen.form_fields());
        if !missing.is_empty() {
            return Err(FormError::Incomplete {
                screen: self.screen,
                missing,
            });
        }

        let next = match self.screen {
            Screen::Welcome => Screen::Auth,
            Screen::Auth => Screen::Profile,
            Screen::Profile => Screen::GameSelection,
            Screen::GameSelection => Screen::Home,
            Screen::Home => Screen::Home,
        };
        if next != self.screen {
            tracing::debug!(from = self.screen.key(), to = next.key(), "navigate");
            if next == Screen::Home {
                tracing::info!(
                    favorites = self.draft.favorite_games().len(),
                    "onboarding complete"
                );
            }
        }
        self.screen = next;
        Ok(next)
    }

    /// Replace one text field of the draft.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    // ── game selection ─────────────────────────────────────────

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Catalog entries matching the current search text.
    pub fn filtered_games(&self) -> Vec<&'static Game> {
        catalog::filter_games(&self.search)
    }

    /// Flip selection of a game; returns whether it is now selected.
    pub fn toggle_game(&mut self, id: GameId) -> bool {
        let selected = self.draft.toggle_game(id);
        tracing::debug!(%id, selected, "toggle game");
        selected
    }

    /// Label of the game-selection forward action.
    pub fn continue_label(&self) -> String {
        match self.draft.favorite_games().len() {
            0 => "Skip for now".to_string(),
            n => format!("Continue ({n} selected)"),
        }
    }

    // ── home ───────────────────────────────────────────────────

    pub fn set_active_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            tracing::debug!(tab = tab.key(), "switch tab");
        }
        self.active_tab = tab;
    }

    pub fn profile_summary(&self) -> ProfileSummary<'_> {
        ProfileSummary {
            email: self.draft.email(),
            age: self.draft.age(),
            favorite_count: self.draft.favorite_games().len(),
        }
    }
}

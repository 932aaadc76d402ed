//! The in-memory user draft collected during onboarding.

use std::collections::BTreeSet;

use super::catalog::{self, GameId};

/// A text field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Password,
    Name,
    Age,
}

impl FormField {
    /// Placeholder shown in the empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Email => "Email address",
            FormField::Password => "Password",
            FormField::Name => "Your name",
            FormField::Age => "Age",
        }
    }

    /// Whether the value should be masked when drawn.
    pub fn is_secret(self) -> bool {
        matches!(self, FormField::Password)
    }
}

/// Everything the user has typed or picked so far.  Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    email: String,
    password: String,
    name: String,
    age: String,
    favorite_games: BTreeSet<GameId>,
}

impl UserDraft {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn favorite_games(&self) -> &BTreeSet<GameId> {
        &self.favorite_games
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into();
    }

    /// Read a field by tag.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Email => self.email(),
            FormField::Password => self.password(),
            FormField::Name => self.name(),
            FormField::Age => self.age(),
        }
    }

    /// Write a field by tag, dispatching to the per-field setter.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Email => self.set_email(value),
            FormField::Password => self.set_password(value),
            FormField::Name => self.set_name(value),
            FormField::Age => self.set_age(value),
        }
    }

    pub fn is_selected(&self, id: GameId) -> bool {
        self.favorite_games.contains(&id)
    }

    /// Flip the selection of `id` and return whether it is now selected.
    ///
    /// Ids outside the catalog are ignored so the selection always stays a
    /// subset of it.
    pub fn toggle_game(&mut self, id: GameId) -> bool {
        if catalog::find(id).is_none() {
            tracing::warn!(%id, "ignoring toggle of unknown game");
            return false;
        }
        if self.favorite_games.remove(&id) {
            false
        } else {
            self.favorite_games.insert(id);
            true
        }
    }

    /// Fields of `fields` that are still empty.
    pub fn missing(&self, fields: &[FormField]) -> Vec<FormField> {
        fields
            .iter()
            .copied()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }
}

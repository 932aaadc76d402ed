//! Screen and tab selectors.

use super::draft::FormField;

/// Which screen of the onboarding flow is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Auth,
    Profile,
    GameSelection,
    Home,
}

impl Screen {
    /// Text fields collected on this screen, in focus order.
    pub fn form_fields(self) -> &'static [FormField] {
        match self {
            Screen::Auth => &[FormField::Email, FormField::Password],
            Screen::Profile => &[FormField::Name, FormField::Age],
            Screen::Welcome | Screen::GameSelection | Screen::Home => &[],
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Auth => "auth",
            Screen::Profile => "profile",
            Screen::GameSelection => "games",
            Screen::Home => "home",
        }
    }
}

/// Bottom tab on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Discover,
    Create,
    Messages,
    Profile,
}

impl Tab {
    /// Tabs in tab-bar order.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::Discover,
        Tab::Create,
        Tab::Messages,
        Tab::Profile,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Discover => "discover",
            Tab::Create => "create",
            Tab::Messages => "messages",
            Tab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Discover => "Discover",
            Tab::Create => "Create",
            Tab::Messages => "Messages",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Discover => "🔍",
            Tab::Create => "➕",
            Tab::Messages => "💬",
            Tab::Profile => "👤",
        }
    }

    /// Placeholder `(title, subtitle)` shown in the content area.
    pub fn placeholder(self) -> (&'static str, &'static str) {
        match self {
            Tab::Home => ("🎲 Home Tab", "Game meetups will appear here"),
            Tab::Discover => ("🔍 Discover Tab", "Find new games and players"),
            Tab::Create => ("➕ Create Tab", "Host a game meetup"),
            Tab::Messages => ("💬 Messages Tab", "Chat with other players"),
            Tab::Profile => ("👤 Profile Tab", "Manage your account"),
        }
    }

    /// Position in [`Tab::ALL`].
    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next tab to the right, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Next tab to the left, wrapping around.
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Screen::default(), Screen::Welcome);
        assert_eq!(Tab::default(), Tab::Home);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Home.prev(), Tab::Profile);
        assert_eq!(Tab::Profile.next(), Tab::Home);
        let mut tab = Tab::Home;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Home);
    }

    #[test]
    fn test_form_fields() {
        assert_eq!(
            Screen::Auth.form_fields(),
            &[FormField::Email, FormField::Password]
        );
        assert_eq!(Screen::Profile.form_fields(), &[FormField::Name, FormField::Age]);
        assert!(Screen::Home.form_fields().is_empty());
    }
}

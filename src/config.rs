//! User configuration: keybindings and display options.
//!
//! Settings are read from a simple key-value text file at
//! `$XDG_CONFIG_HOME/ludus/config.toml` (default `~/.config/ludus/config.toml`).
//! The app only reads it; `--print-config` dumps the defaults for editing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::nav::Screen;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Submit,
    NextField,
    PrevField,
    CursorUp,
    CursorDown,
    ToggleGame,
    NextTab,
    PrevTab,
    Dismiss,
    Quit,
}

impl Action {
    /// Ordered list of all actions (config file order).
    pub const ALL: &[Action] = &[
        Action::Submit,
        Action::NextField,
        Action::PrevField,
        Action::CursorUp,
        Action::CursorDown,
        Action::ToggleGame,
        Action::NextTab,
        Action::PrevTab,
        Action::Dismiss,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::Submit => "submit",
            Action::NextField => "next_field",
            Action::PrevField => "prev_field",
            Action::CursorUp => "cursor_up",
            Action::CursorDown => "cursor_down",
            Action::ToggleGame => "toggle_game",
            Action::NextTab => "next_tab",
            Action::PrevTab => "prev_tab",
            Action::Dismiss => "dismiss",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared.  SHIFT is implied by `BackTab`, so it is ignored there.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mut mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        if self.code == KeyCode::BackTab {
            mask.remove(KeyModifiers::SHIFT);
        }
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"Ctrl+q"`, `"↑"`, `"Enter"`).
    pub fn display(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&match self.code {
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::BackTab => "S-Tab".into(),
            KeyCode::Backspace => "Bksp".into(),
            KeyCode::Delete => "Del".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            _ => key_name(self.code),
        });
        s
    }

    /// Serialise to config-file format (e.g. `"Ctrl+q"`, `"BackTab"`).
    fn to_config_string(&self) -> String {
        let mut s = modifier_prefix(self.modifiers);
        s.push_str(&key_name(self.code));
        s
    }

    /// Parse a key string like `"Ctrl+q"`, `"BackTab"`, `"Enter"`, `"l"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            // Single characters keep their case.
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

fn modifier_prefix(modifiers: KeyModifiers) -> String {
    let mut s = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        s.push_str("Ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        s.push_str("Alt+");
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        s.push_str("Shift+");
    }
    s
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".into(),
        KeyCode::Down => "Down".into(),
        KeyCode::Left => "Left".into(),
        KeyCode::Right => "Right".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "BackTab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Home => "Home".into(),
        KeyCode::End => "End".into(),
        KeyCode::PageUp => "PageUp".into(),
        KeyCode::PageDown => "PageDown".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

// ───────────────────────────────────────── config ────────────

const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Application configuration: keybindings and display options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Draw the password as bullets.
    pub mask_password: bool,
    /// How often the event reader wakes up without input.
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            mask_password: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(Submit, vec![KeyBind::new(Enter, n)]);
        m.insert(NextField, vec![KeyBind::new(Tab, n), KeyBind::new(Down, n)]);
        m.insert(PrevField, vec![KeyBind::new(BackTab, n), KeyBind::new(Up, n)]);
        m.insert(CursorUp, vec![KeyBind::new(Up, n)]);
        m.insert(CursorDown, vec![KeyBind::new(Down, n)]);
        m.insert(ToggleGame, vec![KeyBind::new(Tab, n)]);
        m.insert(NextTab, vec![KeyBind::new(Right, n), KeyBind::new(Tab, n)]);
        m.insert(PrevTab, vec![KeyBind::new(Left, n), KeyBind::new(BackTab, n)]);
        m.insert(Dismiss, vec![KeyBind::new(Esc, n), KeyBind::new(Enter, n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), ctrl), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the first action of `candidates` bound to `event`.
    ///
    /// Keys may be shared between actions that never apply on the same
    /// screen, so callers pass only the actions meaningful where they are.
    pub fn match_key_in(&self, candidates: &[Action], event: KeyEvent) -> Option<Action> {
        candidates.iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|binds| binds.iter().any(|b| b.matches(event)))
        })
    }

    /// Short display of the first binding only (for the status bar).
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint for `screen` from current bindings.
    pub fn status_bar_hint(&self, screen: Screen) -> String {
        let b = |a| self.short_binding(a);
        match screen {
            Screen::Welcome => format!("{}: get started | {}: quit", b(Action::Submit), b(Action::Quit)),
            Screen::Auth | Screen::Profile => format!(
                "type to fill in | {}/{}: switch field | {}: next | {}: quit",
                b(Action::NextField),
                b(Action::PrevField),
                b(Action::Submit),
                b(Action::Quit),
            ),
            Screen::GameSelection => format!(
                "type to search | {}/{}: move | {}: select | {}: continue | {}: quit",
                b(Action::CursorUp),
                b(Action::CursorDown),
                b(Action::ToggleGame),
                b(Action::Submit),
                b(Action::Quit),
            ),
            Screen::Home => format!(
                "{}/{} or 1-5: switch tab | {}: quit",
                b(Action::PrevTab),
                b(Action::NextTab),
                b(Action::Quit),
            ),
        }
    }

    // ── loading ─────────────────────────────────────────────────

    /// Load config from `explicit`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file just means
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = config_path();
                if !p.exists() {
                    tracing::debug!(path = %p.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Self::parse_config(&contents))
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!(line = lineno + 1, "config line without '='");
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            // Display settings.
            match key {
                "mask_password" => {
                    config.mask_password = value != "false";
                    continue;
                }
                "tick_rate_ms" => {
                    match value.parse::<u64>() {
                        Ok(v) => config.tick_rate_ms = v.clamp(10, 1000),
                        Err(_) => tracing::warn!(line = lineno + 1, value, "bad tick_rate_ms"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!(line = lineno + 1, key, "unknown config key");
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                match KeyBind::parse(part) {
                    Some(bind) => parsed.push(bind),
                    None => tracing::warn!(line = lineno + 1, key = part, "unparsable key"),
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    /// Render the config in file format.
    pub fn serialise(&self) -> String {
        let mut lines = vec![
            "# ludus configuration".to_string(),
            String::new(),
            "# Display".to_string(),
            format!("mask_password = {}", self.mask_password),
            format!("tick_rate_ms = {}", self.tick_rate_ms),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab, BackTab,".to_string(),
            "#   Backspace, Delete, Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/ludus/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("ludus").join("config.toml")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[rstest]
    #[case("Ctrl+q", KeyCode::Char('q'), KeyModifiers::CONTROL)]
    #[case("BackTab", KeyCode::BackTab, KeyModifiers::NONE)]
    #[case("space", KeyCode::Char(' '), KeyModifiers::NONE)]
    #[case("F5", KeyCode::F(5), KeyModifiers::NONE)]
    #[case("Q", KeyCode::Char('Q'), KeyModifiers::NONE)]
    #[case("alt+Left", KeyCode::Left, KeyModifiers::ALT)]
    fn test_parse_keybind(
        #[case] input: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(KeyBind::parse(input), Some(KeyBind::new(code, modifiers)));
    }

    #[rstest]
    #[case("Hyper+q")]
    #[case("nonsense")]
    #[case("")]
    fn test_parse_keybind_rejects(#[case] input: &str) {
        assert_eq!(KeyBind::parse(input), None);
    }

    #[test]
    fn test_backtab_matches_with_shift() {
        let bind = KeyBind::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert!(bind.matches(key(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert!(bind.matches(key(KeyCode::BackTab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_ctrl_binding_needs_ctrl() {
        let bind = KeyBind::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(bind.matches(key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!bind.matches(key(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_match_key_in_respects_candidates() {
        let config = AppConfig::default();
        let tab = key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(
            config.match_key_in(&[Action::Submit, Action::NextField], tab),
            Some(Action::NextField)
        );
        assert_eq!(
            config.match_key_in(&[Action::ToggleGame, Action::Submit], tab),
            Some(Action::ToggleGame)
        );
        assert_eq!(config.match_key_in(&[Action::Submit], tab), None);
    }

    #[test]
    fn test_parse_overrides_and_skips_junk() {
        let config = AppConfig::parse_config(
            "# comment\n\
             [section]\n\
             mask_password = false\n\
             tick_rate_ms = 5\n\
             submit = Ctrl+s, bogus+key\n\
             frobnicate = x\n\
             no equals sign\n",
        );
        assert!(!config.mask_password);
        assert_eq!(config.tick_rate_ms, 10);
        assert_eq!(
            config.bindings.get(&Action::Submit),
            Some(&vec![KeyBind::new(KeyCode::Char('s'), KeyModifiers::CONTROL)])
        );
        assert_eq!(
            config.bindings.get(&Action::Quit),
            AppConfig::default_bindings().get(&Action::Quit)
        );
    }

    #[test]
    fn test_status_bar_hint_follows_bindings() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.status_bar_hint(Screen::Welcome),
            "Enter: get started | Ctrl+q: quit"
        );
        config.bindings.insert(
            Action::Submit,
            vec![KeyBind::new(KeyCode::Char('s'), KeyModifiers::CONTROL)],
        );
        assert!(config.status_bar_hint(Screen::Auth).contains("Ctrl+s: next"));
    }

    #[test]
    fn test_serialised_defaults_parse_back() {
        let defaults = AppConfig::default();
        assert_eq!(AppConfig::parse_config(&defaults.serialise()), defaults);
    }

    #[test]
    fn test_load_explicit_path() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "quit = Ctrl+x")?;
        let config = AppConfig::load(Some(file.path()))?;
        assert_eq!(config.short_binding(Action::Quit), "Ctrl+x");
        Ok(())
    }

    #[test]
    fn test_load_missing_explicit_path_fails() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::load(Some(&missing)).expect_err("missing file");
        assert!(err.to_string().contains("nope.toml"));
        Ok(())
    }
}

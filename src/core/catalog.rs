//! The fixed board-game catalog and the search filter over it.
//!
//! The catalog is a `static` slice: entries are never created, mutated or
//! destroyed at runtime, so every [`Game`] handed out is `&'static`.

use std::fmt;

/// Stable identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single selectable board game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub name: &'static str,
    /// Either an emoji or an image filename.
    pub icon: &'static str,
    /// Accent colour as `#RRGGBB`.
    pub color: &'static str,
}

/// Extensions that mark an icon as an image file rather than a glyph.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp"];

impl Game {
    /// `true` when [`Game::icon`] names an image file instead of a glyph.
    pub fn icon_is_file(&self) -> bool {
        let lower = self.icon.to_lowercase();
        IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }
}

const fn game(id: u32, name: &'static str, icon: &'static str, color: &'static str) -> Game {
    Game {
        id: GameId(id),
        name,
        icon,
        color,
    }
}

static CATALOG: &[Game] = &[
    game(1, "Settlers of Catan", "catan-image.jpg", "#FF6B6B"),
    game(2, "Ticket to Ride", "🚂", "#4ECDC4"),
    game(3, "Azul", "🔷", "#45B7D1"),
    game(4, "Splendor", "💎", "#96CEB4"),
    game(5, "King of Tokyo", "🦖", "#FECA57"),
    game(6, "Wingspan", "🦅", "#FF9FF3"),
    game(7, "Pandemic", "🌍", "#54A0FF"),
    game(8, "Monopoly", "🏠", "#5F27CD"),
    game(9, "Scrabble", "📝", "#00D2D3"),
    game(10, "Chess", "♟️", "#FF6348"),
    game(11, "Risk", "⚔️", "#C44569"),
    game(12, "Clue", "🔍", "#F8B500"),
];

/// All games, in display order.
pub fn catalog() -> &'static [Game] {
    CATALOG
}

/// Look up a game by id.
pub fn find(id: GameId) -> Option<&'static Game> {
    catalog().iter().find(|g| g.id == id)
}

/// Case-insensitive substring filter over display names.
///
/// An empty query matches everything.  Results keep catalog order.
pub fn filter_games(query: &str) -> Vec<&'static Game> {
    let needle = query.to_lowercase();
    catalog()
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&needle))
        .collect()
}

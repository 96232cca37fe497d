//! Event categories that select a webhook destination.

use std::fmt;

/// The kind of host event being reported.
///
/// Each category has its own configured destination URL and is used as
/// the label in dispatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A player joined the server.
    PlayerLogin,
    /// A player was killed by another player.
    PlayerDeath,
    /// A player entity was destroyed by another player.
    PlayerKill,
    /// A player looted another player.
    PlayerLoot,
    /// A non-player entity was destroyed by a player.
    EntityDestroyed,
}

impl Category {
    /// All categories, in configuration order.
    pub const ALL: [Self; 5] = [
        Self::PlayerDeath,
        Self::PlayerKill,
        Self::PlayerLoot,
        Self::PlayerLogin,
        Self::EntityDestroyed,
    ];

    /// Returns the category name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlayerLogin => "PlayerLogin",
            Self::PlayerDeath => "PlayerDeath",
            Self::PlayerKill => "PlayerKill",
            Self::PlayerLoot => "PlayerLoot",
            Self::EntityDestroyed => "EntityDestroyed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_name() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.name());
        }
    }

    #[test]
    fn all_lists_each_category_once() {
        let unique: std::collections::HashSet<_> = Category::ALL.iter().collect();
        assert_eq!(unique.len(), 5);
    }
}

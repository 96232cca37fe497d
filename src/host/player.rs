//! Player identity and state flags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable player identifier assigned by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

/// A player as seen at the time of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)] // host state flags
pub struct Player {
    /// Player identifier
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Network address the player connected from
    #[serde(default)]
    pub address: String,
    /// Player has admin rights
    #[serde(default)]
    pub is_admin: bool,
    /// Player is controlled by the server
    #[serde(default)]
    pub is_server: bool,
    /// Player is banned
    #[serde(default)]
    pub is_banned: bool,
    /// Player currently has a live connection
    #[serde(default = "connected_default")]
    pub is_connected: bool,
    /// Current team, if any
    #[serde(default)]
    pub team: Option<TeamId>,
}

const fn connected_default() -> bool {
    true
}

impl Player {
    /// Creates a connected, non-admin player without a team.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            address: String::new(),
            is_admin: false,
            is_server: false,
            is_banned: false,
            is_connected: true,
            team: None,
        }
    }

    /// Sets the network address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the team.
    #[must_use]
    pub const fn with_team(mut self, team: u64) -> Self {
        self.team = Some(TeamId(team));
        self
    }

    /// Marks the player as admin.
    #[must_use]
    pub const fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// Returns true if both players are on the same team.
    ///
    /// Players without a team never share one.
    #[must_use]
    pub fn shares_team_with(&self, other: &Self) -> bool {
        matches!((self.team, other.team), (Some(a), Some(b)) if a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_defaults() {
        let player = Player::new(7, "Alice");
        assert_eq!(player.id, PlayerId(7));
        assert!(player.is_connected);
        assert!(!player.is_admin);
        assert_eq!(player.team, None);
    }

    #[test]
    fn same_team_is_shared() {
        let a = Player::new(1, "A").with_team(5);
        let b = Player::new(2, "B").with_team(5);
        assert!(a.shares_team_with(&b));
    }

    #[test]
    fn different_teams_are_not_shared() {
        let a = Player::new(1, "A").with_team(5);
        let b = Player::new(2, "B").with_team(6);
        assert!(!a.shares_team_with(&b));
    }

    #[test]
    fn teamless_players_do_not_share() {
        let a = Player::new(1, "A");
        let b = Player::new(2, "B");
        assert!(!a.shares_team_with(&b));
        assert!(!a.shares_team_with(&b.with_team(1)));
    }

    #[test]
    fn deserialize_applies_defaults() {
        let player: Player = serde_json::from_str(r#"{"id": 42, "name": "Killer"}"#).unwrap();
        assert_eq!(player, Player::new(42, "Killer"));
    }

    #[test]
    fn player_id_displays_number() {
        assert_eq!(PlayerId(76_561_198_000_000_001).to_string(), "76561198000000001");
    }
}

//! Events delivered by the host.

use serde::{Deserialize, Serialize};

use super::{CombatEntity, HitInfo, Player};

/// One host event callback.
///
/// Serialized with an `event` tag, one record per line on the ingestion
/// stream:
///
/// ```json
/// {"event":"loot_player","player":{"id":1,"name":"A"},"target":{"id":2,"name":"B"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// A player finished connecting.
    PlayerConnected {
        /// The connecting player
        player: Player,
    },
    /// A player died.
    PlayerDeath {
        /// The player who died
        player: Player,
        /// The killing hit
        hit: HitInfo,
    },
    /// A combat entity was destroyed.
    EntityDeath {
        /// The destroyed entity; the host may omit it
        #[serde(default)]
        entity: Option<CombatEntity>,
        /// The destroying hit
        hit: HitInfo,
    },
    /// A player started looting another player.
    LootPlayer {
        /// The looting player
        player: Player,
        /// The looted player
        target: Player,
    },
}

impl HostEvent {
    /// Returns the event name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PlayerConnected { .. } => "player_connected",
            Self::PlayerDeath { .. } => "player_death",
            Self::EntityDeath { .. } => "entity_death",
            Self::LootPlayer { .. } => "loot_player",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Actor, Vec3};

    #[test]
    fn parses_loot_event() {
        let json = r#"{"event":"loot_player","player":{"id":1,"name":"A"},"target":{"id":2,"name":"B"}}"#;
        let event: HostEvent = serde_json::from_str(json).unwrap();

        assert_eq!(
            event,
            HostEvent::LootPlayer {
                player: Player::new(1, "A"),
                target: Player::new(2, "B"),
            }
        );
        assert_eq!(event.name(), "loot_player");
    }

    #[test]
    fn parses_death_event_with_player_initiator() {
        let json = r#"{
            "event": "player_death",
            "player": {"id": 77, "name": "Victim"},
            "hit": {
                "initiator": {"kind": "player", "id": 42, "name": "Killer"},
                "hit_position": {"x": 1.0, "y": 2.0, "z": 3.0}
            }
        }"#;
        let event: HostEvent = serde_json::from_str(json).unwrap();

        let HostEvent::PlayerDeath { player, hit } = event else {
            panic!("expected player_death");
        };
        assert_eq!(player.name, "Victim");
        assert_eq!(
            hit.initiator,
            Some(Actor::Player(Player::new(42, "Killer")))
        );
        assert_eq!(hit.hit_position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn entity_death_without_entity() {
        let json = r#"{"event":"entity_death","hit":{}}"#;
        let event: HostEvent = serde_json::from_str(json).unwrap();

        assert!(matches!(event, HostEvent::EntityDeath { entity: None, .. }));
    }

    #[test]
    fn unknown_event_is_rejected() {
        let json = r#"{"event":"player_jumped","player":{"id":1,"name":"A"}}"#;
        assert!(serde_json::from_str::<HostEvent>(json).is_err());
    }
}

//! Combat entities, attack information and positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Player, PlayerId};

/// A world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Vec3 {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Something that can cause damage or own an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// A player.
    Player(Player),
    /// Any non-player source (animals, NPCs, traps, the environment).
    Other {
        /// Host-side entity name
        name: String,
    },
}

impl Actor {
    /// Returns the player behind this actor, if it is one.
    #[must_use]
    pub const fn as_player(&self) -> Option<&Player> {
        match self {
            Self::Player(player) => Some(player),
            Self::Other { .. } => None,
        }
    }
}

/// Information about the hit that caused a death.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitInfo {
    /// Who dealt the hit, if known
    #[serde(default)]
    pub initiator: Option<Actor>,
    /// Where the hit landed
    #[serde(default)]
    pub hit_position: Vec3,
}

impl HitInfo {
    /// Creates hit info for a hit dealt by `player`.
    #[must_use]
    pub const fn by_player(player: Player, hit_position: Vec3) -> Self {
        Self {
            initiator: Some(Actor::Player(player)),
            hit_position,
        }
    }

    /// Returns the initiating player, if the hit was dealt by one.
    #[must_use]
    pub fn initiator_player(&self) -> Option<&Player> {
        self.initiator.as_ref().and_then(Actor::as_player)
    }
}

/// An automated turret with its own authorization list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AutoTurret {
    /// Players authorized on the turret
    #[serde(default)]
    pub authorized_players: Vec<PlayerId>,
}

/// A building privilege container (tool cupboard).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildingPrivilege {
    /// Players authorized on the building
    #[serde(default)]
    pub authorized_players: Vec<PlayerId>,
}

/// What a combat entity is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityKind {
    /// A player.
    Player(Player),
    /// An automated turret.
    AutoTurret(AutoTurret),
    /// A building privilege container.
    BuildingPrivilege(BuildingPrivilege),
    /// Any other destructible entity.
    Structure,
}

/// An entity that can be damaged and destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEntity {
    /// Host-side entity name (prefab name)
    pub name: String,
    /// Who placed or spawned the entity
    #[serde(default)]
    pub creator: Option<Actor>,
    /// Entity variant
    pub kind: EntityKind,
}

impl CombatEntity {
    /// Creates an entity with no creator.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            creator: None,
            kind,
        }
    }

    /// Sets the creator.
    #[must_use]
    pub fn with_creator(mut self, creator: Actor) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Returns the creating player, if the creator is one.
    #[must_use]
    pub fn creator_player(&self) -> Option<&Player> {
        self.creator.as_ref().and_then(Actor::as_player)
    }

    /// Returns the player this entity is, if it is one.
    #[must_use]
    pub const fn as_player(&self) -> Option<&Player> {
        match &self.kind {
            EntityKind::Player(player) => Some(player),
            _ => None,
        }
    }
}

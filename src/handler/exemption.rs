//! Rules under which an event is intentionally not reported.

use std::fmt;

use crate::host::{CombatEntity, HitInfo, Player, authorized_users};

/// Why an event was not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exemption {
    /// The acting player is an admin.
    AdminActor,
    /// The acting player is controlled by the server.
    ServerActor,
    /// The acting player is banned.
    BannedActor,
    /// The player is no longer connected.
    NotConnected,
    /// The hit was not dealt by a player.
    NonPlayerKiller,
    /// The destroyed entity was not provided by the host.
    MissingVictim,
    /// The killer created the destroyed entity.
    CreatorIsKiller,
    /// The killer is authorized on the destroyed entity.
    AuthorizedKiller,
    /// Both players are on the same team.
    SameTeam,
}

impl fmt::Display for Exemption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::AdminActor => "actor is an admin",
            Self::ServerActor => "actor is server-controlled",
            Self::BannedActor => "actor is banned",
            Self::NotConnected => "player is not connected",
            Self::NonPlayerKiller => "killer is not a player",
            Self::MissingVictim => "no victim entity",
            Self::CreatorIsKiller => "killer created the entity",
            Self::AuthorizedKiller => "killer is authorized on the entity",
            Self::SameTeam => "players share a team",
        };
        f.write_str(reason)
    }
}

/// Checks a connecting player.
#[must_use]
pub const fn connect_exemption(player: &Player) -> Option<Exemption> {
    if player.is_admin {
        Some(Exemption::AdminActor)
    } else if player.is_server {
        Some(Exemption::ServerActor)
    } else if player.is_banned {
        Some(Exemption::BannedActor)
    } else if !player.is_connected {
        Some(Exemption::NotConnected)
    } else {
        None
    }
}

/// Returns the reportable killing player of a hit.
///
/// # Errors
///
/// Returns the exemption when the hit was not dealt by a player, or was
/// dealt by an admin.
pub fn killer_of(hit: &HitInfo) -> Result<&Player, Exemption> {
    let killer = hit.initiator_player().ok_or(Exemption::NonPlayerKiller)?;

    if killer.is_admin {
        return Err(Exemption::AdminActor);
    }

    Ok(killer)
}

/// Checks whether destroying `victim` is the killer's own business.
///
/// Applies only when the victim was created by a player: the creator
/// destroying it, an authorized player destroying it, or a teammate of
/// the creator destroying it are all exempt.
#[must_use]
pub fn entity_death_exemption(victim: &CombatEntity, killer: &Player) -> Option<Exemption> {
    let creator = victim.creator_player()?;

    if creator.id == killer.id {
        return Some(Exemption::CreatorIsKiller);
    }

    if authorized_users(victim).contains(&killer.id) {
        return Some(Exemption::AuthorizedKiller);
    }

    if creator.shares_team_with(killer) {
        return Some(Exemption::SameTeam);
    }

    None
}

/// Checks a loot action.
#[must_use]
pub fn loot_exemption(looter: &Player, target: &Player) -> Option<Exemption> {
    if looter.is_admin {
        return Some(Exemption::AdminActor);
    }

    if looter.shares_team_with(target) {
        return Some(Exemption::SameTeam);
    }

    None
}

//! Authorization lists on deployable entities.

use std::collections::HashSet;

use super::{AutoTurret, BuildingPrivilege, CombatEntity, EntityKind, PlayerId};

/// An entity that keeps a list of authorized players.
pub trait HasAuthorizedUsers {
    /// Returns the IDs of all authorized players.
    fn authorized_user_ids(&self) -> HashSet<PlayerId>;
}

impl HasAuthorizedUsers for AutoTurret {
    fn authorized_user_ids(&self) -> HashSet<PlayerId> {
        self.authorized_players.iter().copied().collect()
    }
}

impl HasAuthorizedUsers for BuildingPrivilege {
    fn authorized_user_ids(&self) -> HashSet<PlayerId> {
        self.authorized_players.iter().copied().collect()
    }
}

/// Returns the players authorized on `entity`.
///
/// Entities without an authorization list yield an empty set.
#[must_use]
pub fn authorized_users(entity: &CombatEntity) -> HashSet<PlayerId> {
    let source: Option<&dyn HasAuthorizedUsers> = match &entity.kind {
        EntityKind::AutoTurret(turret) => Some(turret),
        EntityKind::BuildingPrivilege(privilege) => Some(privilege),
        EntityKind::Player(_) | EntityKind::Structure => None,
    };

    source.map_or_else(HashSet::new, |s| s.authorized_user_ids())
}

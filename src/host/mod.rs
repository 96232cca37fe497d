//! Read-only model of the host game state.
//!
//! The host delivers events carrying snapshots of the actors involved.
//! Nothing here is mutated by this crate; handlers only read flags,
//! identifiers, ownership and authorization lists.

mod authorization;
mod entity;
mod event;
mod player;

pub use authorization::{HasAuthorizedUsers, authorized_users};
pub use entity::{Actor, AutoTurret, BuildingPrivilege, CombatEntity, EntityKind, HitInfo, Vec3};
pub use event::HostEvent;
pub use player::{Player, PlayerId, TeamId};

//! Event handlers that turn host events into webhook dispatches.

use crate::config::Settings;
use crate::host::{CombatEntity, HitInfo, HostEvent, Player};
use crate::webhook::{
    Category, Dispatch, DispatchReporter, HttpClient, Payload, TracingReporter, WebhookDispatcher,
};

use super::exemption::{
    Exemption, connect_exemption, entity_death_exemption, killer_of, loot_exemption,
};

/// What a handler did with an event.
#[derive(Debug)]
pub enum HandlerOutcome {
    /// An exemption rule matched; the dispatcher was not called.
    Exempt(Exemption),
    /// The dispatcher was called once.
    Dispatched(Dispatch),
}

impl HandlerOutcome {
    /// Returns the exemption, if one matched.
    #[must_use]
    pub const fn exemption(&self) -> Option<Exemption> {
        match self {
            Self::Exempt(exemption) => Some(*exemption),
            Self::Dispatched(_) => None,
        }
    }

    /// Returns the dispatch result, if the dispatcher was called.
    #[must_use]
    pub fn into_dispatch(self) -> Option<Dispatch> {
        match self {
            Self::Exempt(_) => None,
            Self::Dispatched(dispatch) => Some(dispatch),
        }
    }

    /// Waits for a submitted request to complete, if there is one.
    pub async fn finished(self) {
        if let Some(dispatch) = self.into_dispatch() {
            dispatch.finished().await;
        }
    }
}

/// Handlers for every host event the relay reports.
///
/// Holds read-only references to the settings and the dispatcher; calls
/// never block and run on whatever thread delivers the event.
#[derive(Debug)]
pub struct EventHandlers<'a, H, R = TracingReporter> {
    settings: &'a Settings,
    dispatcher: &'a WebhookDispatcher<H, R>,
}

impl<'a, H, R> EventHandlers<'a, H, R>
where
    H: HttpClient + 'static,
    R: DispatchReporter + 'static,
{
    /// Creates handlers over the given settings and dispatcher.
    #[must_use]
    pub const fn new(settings: &'a Settings, dispatcher: &'a WebhookDispatcher<H, R>) -> Self {
        Self {
            settings,
            dispatcher,
        }
    }

    /// Routes a host event to its handler.
    pub fn handle(&self, event: &HostEvent) -> HandlerOutcome {
        let outcome = match event {
            HostEvent::PlayerConnected { player } => self.on_player_connected(player),
            HostEvent::PlayerDeath { player, hit } => self.on_player_death(player, hit),
            HostEvent::EntityDeath { entity, hit } => self.on_entity_death(entity.as_ref(), hit),
            HostEvent::LootPlayer { player, target } => self.on_loot_player(player, target),
        };

        if let HandlerOutcome::Exempt(exemption) = &outcome {
            tracing::debug!("Skipping {}: {exemption}", event.name());
        }

        outcome
    }

    /// A player finished connecting.
    ///
    /// Reports `name`, `id`, `address` as `PlayerLogin`.
    pub fn on_player_connected(&self, player: &Player) -> HandlerOutcome {
        if let Some(exemption) = connect_exemption(player) {
            return HandlerOutcome::Exempt(exemption);
        }

        let payload = Payload::new()
            .with("name", player.name.as_str())
            .with("id", player.id.to_string())
            .with("address", player.address.as_str());

        self.send(Category::PlayerLogin, &payload)
    }

    /// A player was killed.
    ///
    /// Reports `name`, `id`, `killer_name`, `killer_id`, `hit_position`
    /// as `PlayerDeath`.
    pub fn on_player_death(&self, victim: &Player, hit: &HitInfo) -> HandlerOutcome {
        let killer = match killer_of(hit) {
            Ok(killer) => killer,
            Err(exemption) => return HandlerOutcome::Exempt(exemption),
        };

        let payload = Payload::new()
            .with("name", victim.name.as_str())
            .with("id", victim.id.to_string())
            .with("killer_name", killer.name.as_str())
            .with("killer_id", killer.id.to_string())
            .with("hit_position", hit.hit_position.to_string());

        self.send(Category::PlayerDeath, &payload)
    }

    /// A combat entity was destroyed.
    ///
    /// A player victim is reported as `PlayerKill` with `name`, `id`,
    /// `target_name`, `target_id`, `hit_position`. Anything else is reported
    /// as `EntityDestroyed` with `name`, `id`, `owner_name`, `owner_id`
    /// (only when a player created it), `entity_name`, `hit_position`.
    pub fn on_entity_death(&self, victim: Option<&CombatEntity>, hit: &HitInfo) -> HandlerOutcome {
        let Some(victim) = victim else {
            return HandlerOutcome::Exempt(Exemption::MissingVictim);
        };

        let killer = match killer_of(hit) {
            Ok(killer) => killer,
            Err(exemption) => return HandlerOutcome::Exempt(exemption),
        };

        if let Some(exemption) = entity_death_exemption(victim, killer) {
            return HandlerOutcome::Exempt(exemption);
        }

        let mut payload = Payload::new()
            .with("name", killer.name.as_str())
            .with("id", killer.id.to_string());

        let category = if let Some(target) = victim.as_player() {
            payload.insert("target_name", target.name.as_str());
            payload.insert("target_id", target.id.to_string());
            Category::PlayerKill
        } else {
            if let Some(owner) = victim.creator_player() {
                payload.insert("owner_name", owner.name.as_str());
                payload.insert("owner_id", owner.id.to_string());
            }
            payload.insert("entity_name", victim.name.as_str());
            Category::EntityDestroyed
        };

        payload.insert("hit_position", hit.hit_position.to_string());

        self.send(category, &payload)
    }

    /// A player started looting another player.
    ///
    /// Reports `name`, `id`, `target_name`, `target_id` as `PlayerLoot`.
    pub fn on_loot_player(&self, looter: &Player, target: &Player) -> HandlerOutcome {
        if let Some(exemption) = loot_exemption(looter, target) {
            return HandlerOutcome::Exempt(exemption);
        }

        let payload = Payload::new()
            .with("name", looter.name.as_str())
            .with("id", looter.id.to_string())
            .with("target_name", target.name.as_str())
            .with("target_id", target.id.to_string());

        self.send(Category::PlayerLoot, &payload)
    }

    fn send(&self, category: Category, payload: &Payload) -> HandlerOutcome {
        HandlerOutcome::Dispatched(self.dispatcher.dispatch(
            category,
            self.settings.url(category),
            self.settings.api_key.as_ref(),
            payload,
        ))
    }
}

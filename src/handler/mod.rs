//! Host event handlers.
//!
//! Each handler reacts to one host event, applies its exemption rules, and
//! dispatches at most one webhook.

mod exemption;
mod handlers;


pub use exemption::{
    Exemption, connect_exemption, entity_death_exemption, killer_of, loot_exemption,
};
pub use handlers::{EventHandlers, HandlerOutcome};

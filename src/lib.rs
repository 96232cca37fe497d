//! Twin Mills: game event webhook relay
//!
//! A library for turning host game events (connections, deaths, destroyed
//! entities, looting) into authenticated, fire-and-forget webhook calls.

pub mod config;
pub mod handler;
pub mod host;
pub mod webhook;

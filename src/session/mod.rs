//! Session management module.
//!
//! This module provides the session state shared by the players of a
//! match and the store that keeps it for the lifetime of the process.

mod state;
mod store;

pub use state::{default_players, Availability, SessionState, PLAYER_SLOTS};
pub use store::{InMemorySessionStore, SessionStore};

//! Session state shared by the four players of a match.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of player slots in a session.
pub const PLAYER_SLOTS: usize = 4;

/// Availability slots keyed by player name.
///
/// Ordered so that equal states always serialize to identical JSON.
pub type Availability = BTreeMap<String, Vec<String>>;

/// State of one scheduling session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Session identifier, never blank once stored.
    pub session_id: String,
    /// Player names; empty strings are unfilled slots.
    pub players: Vec<String>,
    /// Time slots each player is free for.
    pub availability: Availability,
}

impl SessionState {
    /// Create the default state for a session nobody has written yet.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            players: default_players(),
            availability: Availability::new(),
        }
    }
}

/// Four empty placeholder names.
pub fn default_players() -> Vec<String> {
    vec![String::new(); PLAYER_SLOTS]
}

//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::session::{default_players, Availability, SessionState};

/// Query string of `GET /api/session`.
#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    /// Session to fetch.
    pub session: Option<String>,
}

impl SessionQuery {
    /// Build from decoded query pairs; a repeated `session` key keeps its
    /// first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            session: pairs
                .into_iter()
                .find(|(key, _)| key == "session")
                .map(|(_, value)| value),
        }
    }

    /// The requested id, or `None` if absent or blank.
    pub fn session_id(&self) -> Option<&str> {
        non_blank(self.session.as_deref())
    }
}

/// Body of `POST /api/session`.
///
/// Every field is optional on the wire; `players` and `availability`
/// are filled in by [`SessionPayload::into_state`]. Unknown fields fail
/// the decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionPayload {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default)]
    pub availability: Option<Availability>,
}

impl SessionPayload {
    /// Decode a request body, whatever content type it was sent with.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// The session id, or `None` if absent or blank.
    pub fn session_id(&self) -> Option<&str> {
        non_blank(self.session_id.as_deref())
    }

    /// Build the state to store, substituting defaults for missing fields.
    ///
    /// Returns `None` when the payload has no usable session id.
    pub fn into_state(self) -> Option<SessionState> {
        let session_id = self.session_id.filter(|id| !id.trim().is_empty())?;
        Some(SessionState {
            session_id,
            players: self.players.unwrap_or_else(default_players),
            availability: self.availability.unwrap_or_default(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Generic API error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn missing_session() -> Self {
        Self::bad_request("Missing session")
    }

    pub fn missing_session_id() -> Self {
        Self::bad_request("Missing sessionId")
    }

    pub fn invalid_body(err: &serde_json::Error) -> Self {
        Self::bad_request(format!("Invalid session body: {}", err))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

//! REST API handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::types::{ErrorResponse, SessionPayload, SessionQuery};
use crate::session::{InMemorySessionStore, SessionState, SessionStore};

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemorySessionStore::new()))
    }

    /// State backed by the given store.
    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Fetch a session, creating the default state on first access.
pub async fn get_session(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SessionState>, ApiError> {
    let query = SessionQuery::from_pairs(params);
    let Some(session_id) = query.session_id() else {
        tracing::warn!("rejected session fetch without id");
        return Err(bad_request(ErrorResponse::missing_session()));
    };

    let session = state
        .store
        .get_or_create(session_id)
        .map_err(internal_error)?;

    tracing::debug!(session = session_id, "session fetched");
    Ok(Json(SessionState::clone(&session)))
}

/// Replace a session's state wholesale.
///
/// The body is decoded as JSON regardless of its `Content-Type`.
pub async fn put_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SessionState>, ApiError> {
    let payload = SessionPayload::from_json(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected undecodable session body");
        bad_request(ErrorResponse::invalid_body(&e))
    })?;

    let Some(incoming) = payload.into_state() else {
        tracing::warn!("rejected session update without sessionId");
        return Err(bad_request(ErrorResponse::missing_session_id()));
    };

    let stored = state
        .store
        .put(incoming.session_id.clone(), incoming)
        .map_err(internal_error)?;

    tracing::debug!(session = %stored.session_id, "session replaced");
    Ok(Json(SessionState::clone(&stored)))
}

fn bad_request(body: ErrorResponse) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(body))
}

fn internal_error(e: crate::PadelError) -> ApiError {
    tracing::error!(error = %e, "session store failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error(e.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PadelError;

    /// Store whose lock is always poisoned.
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get_or_create(&self, _session_id: &str) -> crate::Result<Arc<SessionState>> {
            Err(PadelError::LockPoisoned)
        }

        fn put(
            &self,
            _session_id: String,
            _state: SessionState,
        ) -> crate::Result<Arc<SessionState>> {
            Err(PadelError::LockPoisoned)
        }
    }

    fn query(session: Option<&str>) -> Query<Vec<(String, String)>> {
        Query(
            session
                .map(|s| vec![("session".to_string(), s.to_string())])
                .unwrap_or_default(),
        )
    }

    fn payload(session_id: Option<&str>) -> Bytes {
        let body = match session_id {
            Some(id) => serde_json::json!({ "sessionId": id }),
            None => serde_json::json!({}),
        };
        Bytes::from(body.to_string())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(health().await, "OK");
    }

    #[tokio::test]
    async fn test_get_session_creates_default() {
        let state = AppState::new();
        let Json(session) = get_session(State(state), query(Some("s1"))).await.unwrap();
        assert_eq!(session, SessionState::new("s1"));
    }

    #[tokio::test]
    async fn test_get_session_missing_id() {
        let store = Arc::new(InMemorySessionStore::new());
        let state = AppState::with_store(store.clone());

        let (status, Json(body)) = get_session(State(state.clone()), query(None))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Missing session");

        let (status, _) = get_session(State(state), query(Some("   ")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_put_session_missing_id_leaves_store_untouched() {
        let store = Arc::new(InMemorySessionStore::new());
        let state = AppState::with_store(store.clone());

        let (status, Json(body)) = put_session(State(state), payload(Some("")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Missing sessionId");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_put_session_returns_defaulted_state() {
        let state = AppState::new();
        let Json(session) = put_session(State(state), payload(Some("s1"))).await.unwrap();
        assert_eq!(session, SessionState::new("s1"));
    }

    #[tokio::test]
    async fn test_put_session_undecodable_body() {
        let store = Arc::new(InMemorySessionStore::new());
        let state = AppState::with_store(store.clone());

        let (status, Json(body)) = put_session(State(state), Bytes::from_static(b"{ nope"))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.starts_with("Invalid session body"));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_get_session_repeated_param_uses_first() {
        let state = AppState::new();
        let params = vec![
            ("session".to_string(), "a".to_string()),
            ("session".to_string(), "b".to_string()),
        ];

        let Json(session) = get_session(State(state), Query(params)).await.unwrap();
        assert_eq!(session.session_id, "a");
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_500() {
        let state = AppState::with_store(Arc::new(BrokenStore));

        let (status, Json(body)) = get_session(State(state.clone()), query(Some("s1")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "INTERNAL_ERROR");

        let (status, _) = put_session(State(state), payload(Some("s1")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! HTTP API for padel-sessions.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/session?session={id}` - Fetch a session, created with
//!   defaults on first access
//! - `POST /api/session` - Replace a session with the JSON body
//!
//! Both session routes answer with the session as JSON:
//!
//! ```json
//! {
//!   "sessionId": "tuesday-league",
//!   "players": ["Ana", "Ben", "", ""],
//!   "availability": { "Ana": ["mon-18", "wed-20"] }
//! }
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use padel_sessions::api::{ServerConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> padel_sessions::Result<()> {
//!     let config = ServerConfig::new("127.0.0.1", 8080);
//!     serve(config).await
//! }
//! ```

pub mod handlers;
pub mod router;
pub mod types;

// Re-export commonly used types
pub use handlers::AppState;
pub use router::{
    create_router, create_router_with_state, serve, serve_with_state, ServerConfig, SESSION_PATH,
};
pub use types::{ErrorResponse, SessionPayload, SessionQuery};

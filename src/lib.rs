//! # padel-sessions
//!
//! Shared session state for scheduling padel matches.
//!
//! A session holds the four players of a match and the time slots each of
//! them is available for. Clients fetch and replace sessions over a small
//! JSON HTTP API; state lives in memory for the lifetime of the process.
//!
//! ## Features
//!
//! - **Fetch-or-create**: unknown sessions come back with empty defaults
//! - **Whole-state replace**: a POST overwrites the stored session
//! - **Concurrent store**: one default instance per id, however many
//!   requests race to create it
//!
//! ## Quick Start
//!
//! ```no_run
//! use padel_sessions::api::{serve_with_state, AppState, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> padel_sessions::Result<()> {
//!     padel_sessions::logging::try_init().ok();
//!
//!     let state = AppState::new();
//!     serve_with_state(ServerConfig::default(), state).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use error::{PadelError, Result};
pub use session::{InMemorySessionStore, SessionState, SessionStore};

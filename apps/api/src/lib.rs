//! # Vacation API
//!
//! HTTP surface of the vacation service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          HTTP API Server                                │
//! │                                                                         │
//! │  Client ──► axum router ──► handlers ──► SyncService                    │
//! │                                             │                           │
//! │                                   ┌─────────┴──────────┐                │
//! │                                   ▼                    ▼                │
//! │                             Record Store         Search Index           │
//! │                            (authoritative)      (best-effort)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library target exists so integration tests can drive the router
//! in-process; `main.rs` only wires configuration and serving around it.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use routes::{build_router, AppState};

//! # Router Assembly
//!
//! Route table and shared application state.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use vacation_sync::SyncService;

use crate::handlers;

/// Shared application state.
///
/// The service already owns its store handles, so the state is a single
/// `Arc` and cloning it per request is free.
#[derive(Clone)]
pub struct AppState {
    pub sync: Arc<SyncService>,
}

/// Builds the full application router.
///
/// ## Route Table
/// ```text
/// POST   /vacations                  create (201 + Location)
/// GET    /vacations                  list all
/// GET    /vacations/{id}             fetch one (404 when absent)
/// PUT    /vacations/{id}             full update
/// PATCH  /vacations/{id}             merge patch
/// DELETE /vacations/{id}             delete (always 204)
/// GET    /_search/vacations?query=Q  free-text search
/// GET    /health                     liveness probe
/// ```
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/vacations",
            post(handlers::create_vacation).get(handlers::get_all_vacations),
        )
        .route(
            "/vacations/{id}",
            put(handlers::update_vacation)
                .patch(handlers::partial_update_vacation)
                .get(handlers::get_vacation)
                .delete(handlers::delete_vacation),
        )
        .route("/_search/vacations", get(handlers::search_vacations))
        .route("/health", get(handlers::health))
        .with_state(state)
}

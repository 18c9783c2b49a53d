//! # Request Handlers
//!
//! One handler per route. Handlers stay thin: decode, delegate to the
//! synchronization service, encode. Identifier preconditions that belong
//! to the wire shape (body id vs path id) are checked here; everything
//! else is the service's business.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use vacation_core::{VacationPatch, VacationRecord};

use crate::error::ApiError;
use crate::routes::AppState;

// =============================================================================
// Mutations
// =============================================================================

/// `POST /vacations` : create a new vacation record.
///
/// 201 with the stored record and a `Location` header; 400 `idexists`
/// when the body already carries an id.
pub async fn create_vacation(
    State(state): State<AppState>,
    Json(body): Json<VacationRecord>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("REST request to save vacation");

    let created = state.sync.create(body).await?;
    let id = created
        .id
        .ok_or_else(|| ApiError::Internal("created record carries no id".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/vacations/{}", id))],
        Json(created),
    ))
}

/// `PUT /vacations/{id}` : wholesale replacement of an existing record.
pub async fn update_vacation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<VacationRecord>,
) -> Result<Json<VacationRecord>, ApiError> {
    debug!(id = id, "REST request to update vacation");

    let updated = state.sync.full_update(id, body).await?;
    Ok(Json(updated))
}

/// `PATCH /vacations/{id}` : merge-patch an existing record.
///
/// The body is a full record shape; absent fields mean "unchanged". The
/// id preconditions match the full update's, including the existence
/// check, so a confused client sees the same 400 alerts either way. The
/// service-level soft miss (record vanished between check and merge)
/// answers 404.
pub async fn partial_update_vacation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<VacationRecord>,
) -> Result<Json<VacationRecord>, ApiError> {
    debug!(id = id, "REST request to partially update vacation");

    let body_id = body.id.ok_or_else(ApiError::id_null)?;
    if body_id != id {
        return Err(ApiError::id_invalid());
    }
    if state.sync.find_one(id).await?.is_none() {
        return Err(ApiError::id_not_found());
    }

    let patch = VacationPatch::from(&body);
    let merged = state
        .sync
        .partial_update(id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(merged))
}

/// `DELETE /vacations/{id}` : delete from both stores. Always 204.
pub async fn delete_vacation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    debug!(id = id, "REST request to delete vacation");

    state.sync.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Reads
// =============================================================================

/// `GET /vacations` : all records.
pub async fn get_all_vacations(
    State(state): State<AppState>,
) -> Result<Json<Vec<VacationRecord>>, ApiError> {
    debug!("REST request to get all vacations");

    let records = state.sync.find_all().await?;
    Ok(Json(records))
}

/// `GET /vacations/{id}` : one record, 404 when absent.
pub async fn get_vacation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VacationRecord>, ApiError> {
    debug!(id = id, "REST request to get vacation");

    let record = state.sync.find_one(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(record))
}

/// Query string shape for the search route.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query. Opaque to the caller; sanitized by the index.
    pub query: String,
}

/// `GET /_search/vacations?query=Q` : free-text search, rank ordered.
pub async fn search_vacations(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<VacationRecord>>, ApiError> {
    debug!(query = %params.query, "REST request to search vacations");

    let records = state.sync.search(&params.query).await?;
    Ok(Json(records))
}

/// `GET /health` : liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

//! # HTTP Error Mapping
//!
//! Translates [`SyncError`] into HTTP responses.
//!
//! ## Alert Codes
//! Client mistakes around identifiers answer 400 with a structured alert
//! body `{"entityName": "vacation", "errorKey": <code>, "message": <text>}`:
//!
//! | Code         | Meaning                                   |
//! |--------------|-------------------------------------------|
//! | `idexists`   | create body already carries an id         |
//! | `idnull`     | update body carries no id                 |
//! | `idinvalid`  | path id and body id disagree              |
//! | `idnotfound` | update targets an id with no stored record|
//!
//! Backend failures answer a plain 500; the detail goes to the log, not
//! to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use vacation_sync::SyncError;

/// Entity name carried in every alert body.
const ENTITY_NAME: &str = "vacation";

/// HTTP-facing error for the vacation API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A 400 with a structured alert body.
    #[error("{message}")]
    BadRequestAlert {
        error_key: &'static str,
        message: String,
    },

    /// A plain 404.
    #[error("Not Found")]
    NotFound,

    /// A plain 500. The detail is logged, never sent to the client.
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    /// Alert for a create body that already carries an id.
    pub fn id_exists() -> Self {
        ApiError::BadRequestAlert {
            error_key: "idexists",
            message: "A new vacation cannot already have an ID".to_string(),
        }
    }

    /// Alert for an update body with no id.
    pub fn id_null() -> Self {
        ApiError::BadRequestAlert {
            error_key: "idnull",
            message: "Invalid id".to_string(),
        }
    }

    /// Alert for a body id that disagrees with the path id.
    pub fn id_invalid() -> Self {
        ApiError::BadRequestAlert {
            error_key: "idinvalid",
            message: "Invalid ID".to_string(),
        }
    }

    /// Alert for an update targeting an id with no stored record.
    pub fn id_not_found() -> Self {
        ApiError::BadRequestAlert {
            error_key: "idnotfound",
            message: "Entity not found".to_string(),
        }
    }
}

impl From<SyncError> for ApiError {
    fn from(error: SyncError) -> Self {
        match error {
            SyncError::IdAlreadyAssigned => ApiError::id_exists(),
            SyncError::MissingId => ApiError::id_null(),
            SyncError::IdMismatch { .. } => ApiError::id_invalid(),
            SyncError::UnknownId(_) => ApiError::id_not_found(),
            SyncError::Store(e) => ApiError::Internal(e.to_string()),
            SyncError::Index(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequestAlert { error_key, message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "entityName": ENTITY_NAME,
                    "errorKey": error_key,
                    "message": message,
                })),
            )
                .into_response(),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! Handler for the delete endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::response::StatusResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Behavior
///
/// The record is removed physically. Deleting an alias that does not exist
/// still returns `{"status": "OK"}`.
///
/// # Errors
///
/// Returns 500 on storage failures.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    state.url_service.delete(&alias).await?;

    Ok(Json(StatusResponse::ok()))
}

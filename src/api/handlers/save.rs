//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Maps a target URL to a short alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "alias": "ex1"   // optional, generated when absent or empty
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded, `url` is missing, or validation fails
/// - 409 `{"status": "Error", "msg": "url already exists"}` if the alias is taken
/// - 500 on storage failures
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "failed to decode request body");
        AppError::bad_request(
            "failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let payload = payload.normalized();
    tracing::debug!(request = ?payload, "request body decoded");

    payload.validate().inspect_err(|e| {
        tracing::info!(error = %e, "invalid request");
    })?;

    let SaveRequest {
        url: Some(url),
        alias,
    } = payload
    else {
        return Err(AppError::bad_request(
            "field url is a required field",
            Value::Null,
        ));
    };

    let record = state.url_service.shorten(url, alias).await?;

    Ok(Json(SaveResponse::ok(record.alias)))
}

//! Handler for listing every stored mapping.

use axum::{Json, extract::State};

use crate::api::dto::url::UrlItem;
use crate::error::AppError;
use crate::state::AppState;

/// Returns all stored mappings.
///
/// # Endpoint
///
/// `GET /url/all`
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "alias": "ex1", "url": "https://example.com/a" }
/// ]
/// ```
///
/// An empty registry yields `[]`.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<UrlItem>>, AppError> {
    let records = state.url_service.list_all().await?;

    Ok(Json(records.into_iter().map(UrlItem::from).collect()))
}

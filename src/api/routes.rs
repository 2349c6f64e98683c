//! API route configuration.
//!
//! Everything under `/url` requires HTTP Basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, list_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Mapping management routes, protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST   /url`          - Map a URL to an alias (generated when absent)
/// - `GET    /url/all`      - List every mapping
/// - `DELETE /url/{alias}`  - Delete a mapping
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/all", get(list_handler))
        .route("/url/{alias}", delete(delete_handler))
}

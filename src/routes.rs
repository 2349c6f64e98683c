//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`  - Alias redirect (public)
//! - `GET  /health`   - Health check (public)
//! - `/url*`          - Mapping management (Basic auth required)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` generated when absent and echoed on the response
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured timeout get `408`
//! - **Panic recovery** - A panicking handler yields `500` instead of a dropped connection
//! - **Authentication** - Basic credentials on `/url*`

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound for handling a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(api_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::set_request_id_layer())
                .layer(tracing::layer())
                .layer(tracing::propagate_request_id_layer())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                ))
                .layer(CatchPanicLayer::new()),
        )
}

#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use url_alias::application::services::{AuthService, UrlService};
use url_alias::domain::repositories::AliasRegistry;
use url_alias::infrastructure::persistence::SqliteAliasRegistry;
use url_alias::routes::app_router;
use url_alias::state::AppState;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// `Authorization` value for `admin:secret`.
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";
/// `Authorization` value for `admin:wrong`.
pub const BAD_AUTH_HEADER: &str = "Basic YWRtaW46d3Jvbmc=";

pub async fn create_test_registry() -> SqliteAliasRegistry {
    SqliteAliasRegistry::in_memory().await.unwrap()
}

pub fn create_test_state(registry: SqliteAliasRegistry) -> AppState {
    let url_service = Arc::new(UrlService::new(Arc::new(registry), 6));
    let auth_service = Arc::new(AuthService::new(
        TEST_USER.to_string(),
        TEST_PASSWORD.to_string(),
    ));

    AppState::new(url_service, auth_service)
}

pub async fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state(create_test_registry().await);
    let app = app_router(state.clone(), Duration::from_secs(4));

    (TestServer::new(app).unwrap(), state)
}

pub async fn create_test_url(state: &AppState, alias: &str, url: &str) {
    state.url_service.registry().save(url, alias).await.unwrap();
}

//! Shared application state.

use std::sync::Arc;

use crate::application::services::{AuthService, UrlService};
use crate::infrastructure::persistence::SqliteAliasRegistry;

/// State handed to every handler.
///
/// Built once at start-up; the registry inside is the only handle on storage.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<SqliteAliasRegistry>>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService<SqliteAliasRegistry>>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            url_service,
            auth_service,
        }
    }
}

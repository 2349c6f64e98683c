//! Application layer services implementing business logic.
//!
//! Services consume the registry trait and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias creation, resolution, listing and deletion
//! - [`services::auth_service::AuthService`] - HTTP Basic credential checks

pub mod services;

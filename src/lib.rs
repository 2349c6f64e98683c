//! # URL Alias
//!
//! A small URL shortening service built with Axum and SQLite. Clients map long
//! URLs to short aliases and are redirected when they visit an alias.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, registry errors and the registry trait
//! - **Application Layer** ([`application`]) - Alias creation rules and authentication
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed alias registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="change-me"
//! export STORAGE_PATH="./storage/storage.db"  # Optional
//!
//! cargo run
//! ```
//!
//! The schema is applied automatically when storage is opened.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, UrlService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::error::RegistryError;
    pub use crate::domain::repositories::AliasRegistry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteAliasRegistry;
    pub use crate::state::AppState;
}

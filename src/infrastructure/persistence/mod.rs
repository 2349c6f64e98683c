//! SQLite registry implementation.
//!
//! Concrete implementation of [`crate::domain::repositories::AliasRegistry`]
//! using SQLx with bound parameters.
//!
//! # Registries
//!
//! - [`SqliteAliasRegistry`] - Alias storage, lookup, listing and deletion

pub mod sqlite_alias_registry;

pub use sqlite_alias_registry::SqliteAliasRegistry;

//! Registry trait for alias to URL persistence.

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use async_trait::async_trait;

/// Durable storage and retrieval of alias to target mappings.
///
/// Each operation is a single round-trip to the backend with no internal retry.
/// Concurrent [`save`](AliasRegistry::save) calls for the same alias are
/// arbitrated by the backend: exactly one succeeds, the rest receive
/// [`RegistryError::AliasConflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteAliasRegistry`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AliasRegistry: Send + Sync {
    /// Inserts a new record and returns its storage-assigned id.
    ///
    /// `alias` must be non-empty; defaulting it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AliasConflict`] if the alias already exists.
    /// Returns [`RegistryError::Storage`] on any other backend failure.
    async fn save(&self, target: &str, alias: &str) -> Result<i64, RegistryError>;

    /// Looks up the target for an exact, case-sensitive alias match.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no record has that alias.
    /// Returns [`RegistryError::Storage`] on read failures.
    async fn get(&self, alias: &str) -> Result<String, RegistryError>;

    /// Returns every record. An empty registry yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] on read failures.
    async fn list_all(&self) -> Result<Vec<UrlRecord>, RegistryError>;

    /// Physically removes the record with that alias.
    ///
    /// Deleting an unknown alias is not an error. Returns `Ok(true)` if a row was
    /// removed, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] on backend failures.
    async fn delete(&self, alias: &str) -> Result<bool, RegistryError>;

    /// Checks that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the backend does not answer.
    async fn ping(&self) -> Result<(), RegistryError>;
}

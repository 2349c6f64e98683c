//! Error taxonomy of the alias registry.
//!
//! These errors carry no HTTP semantics. The API layer decides how each kind is
//! presented (see [`crate::error::AppError`]).

use thiserror::Error;

/// Boxed backend error kept as the source of storage failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`crate::domain::repositories::AliasRegistry`] operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The backing store could not be opened or its schema could not be created.
    #[error("failed to initialize storage: {0}")]
    StorageInit(#[source] BoxError),

    /// A record with this alias already exists.
    #[error("alias '{alias}' already exists")]
    AliasConflict { alias: String },

    /// No record has this alias.
    #[error("alias '{alias}' not found")]
    NotFound { alias: String },

    /// Any other backend failure on read, write or delete.
    #[error("storage error: {0}")]
    Storage(#[source] BoxError),
}

impl RegistryError {
    pub fn storage_init(source: impl Into<BoxError>) -> Self {
        Self::StorageInit(source.into())
    }

    pub fn storage(source: impl Into<BoxError>) -> Self {
        Self::Storage(source.into())
    }

    /// Returns true for [`RegistryError::AliasConflict`].
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AliasConflict { .. })
    }

    /// Returns true for [`RegistryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

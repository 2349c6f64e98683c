//! Alias creation, resolution, listing and deletion service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use crate::domain::repositories::AliasRegistry;
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_alias};
use crate::utils::url_validator::validate_target;
use serde_json::{Value, json};

/// Attempts made with freshly generated aliases before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Service sitting between HTTP handlers and the alias registry.
///
/// Defaults missing aliases with the random generator and retries when a
/// generated alias collides. A caller supplied alias is saved exactly once.
pub struct UrlService<R: AliasRegistry> {
    registry: Arc<R>,
    alias_length: usize,
}

impl<R: AliasRegistry> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// - `registry` - registry used for all persistence
    /// - `alias_length` - length of generated aliases
    pub fn new(registry: Arc<R>, alias_length: usize) -> Self {
        Self {
            registry,
            alias_length,
        }
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &R {
        self.registry.as_ref()
    }

    /// Maps `target` to `alias`, or to a generated alias when `alias` is `None`.
    ///
    /// The target is stored exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target is not an HTTP(S) URL or the
    /// alias is invalid.
    ///
    /// Returns [`AppError::Conflict`] if the supplied alias is already taken.
    ///
    /// Returns [`AppError::Internal`] on storage failures or when every generated
    /// alias collided.
    pub async fn shorten(
        &self,
        target: String,
        alias: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        validate_target(&target).map_err(|e| {
            AppError::bad_request("invalid url", json!({ "reason": e.to_string() }))
        })?;

        match alias {
            Some(alias) => {
                validate_alias(&alias).map_err(|e| {
                    AppError::bad_request("invalid alias", json!({ "reason": e.to_string() }))
                })?;

                match self.registry.save(&target, &alias).await {
                    Ok(id) => {
                        tracing::info!(id, alias = %alias, "url added");
                        Ok(UrlRecord::new(id, alias, target))
                    }
                    Err(RegistryError::AliasConflict { alias }) => {
                        tracing::info!(alias = %alias, "url already exists");
                        Err(AppError::conflict(
                            "url already exists",
                            json!({ "alias": alias }),
                        ))
                    }
                    Err(e) => Err(save_failed(e)),
                }
            }
            None => self.shorten_with_generated_alias(target).await,
        }
    }

    /// Saves `target` under a generated alias, regenerating on collision.
    async fn shorten_with_generated_alias(&self, target: String) -> Result<UrlRecord, AppError> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let alias = generate_alias(self.alias_length);

            match self.registry.save(&target, &alias).await {
                Ok(id) => {
                    tracing::info!(id, alias = %alias, "url added");
                    return Ok(UrlRecord::new(id, alias, target));
                }
                Err(RegistryError::AliasConflict { alias }) => {
                    tracing::debug!(alias = %alias, attempt, "generated alias collided");
                }
                Err(e) => return Err(save_failed(e)),
            }
        }

        tracing::error!(
            attempts = MAX_GENERATE_ATTEMPTS,
            "failed to generate unique alias"
        );
        Err(AppError::internal(
            "failed to generate unique alias",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this alias.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.registry.get(alias).await.map_err(|e| match e {
            RegistryError::NotFound { alias } => {
                tracing::info!(alias = %alias, "url not found");
                AppError::not_found("url not found", json!({ "alias": alias }))
            }
            e => {
                tracing::error!(error = %e, "failed to get url");
                AppError::internal("internal error", Value::Null)
            }
        })
    }

    /// Returns every stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let records = self.registry.list_all().await.map_err(|e| {
            tracing::error!(error = %e, "failed to get all urls");
            AppError::internal("internal error", Value::Null)
        })?;

        tracing::info!(count = records.len(), "fetched all urls");
        Ok(records)
    }

    /// Deletes the mapping for `alias`.
    ///
    /// Succeeds whether or not the alias existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        let removed = self.registry.delete(alias).await.map_err(|e| {
            tracing::error!(error = %e, alias, "failed to delete url");
            AppError::internal("internal error", Value::Null)
        })?;

        if removed {
            tracing::info!(alias, "url was deleted");
        } else {
            tracing::debug!(alias, "delete of unknown alias");
        }

        Ok(())
    }

    /// Returns true if the registry answers.
    pub async fn health_check(&self) -> bool {
        match self.registry.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "storage health check failed");
                false
            }
        }
    }
}

/// Logs and maps a non-conflict save failure.
fn save_failed(e: RegistryError) -> AppError {
    tracing::error!(error = %e, "failed to add url");
    AppError::internal("failed to add url", Value::Null)
}

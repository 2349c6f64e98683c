//! SQLite implementation of the alias registry.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::UrlRecord;
use crate::domain::error::RegistryError;
use crate::domain::repositories::AliasRegistry;
use crate::utils::db_error::is_unique_violation;

/// Row shape of the `url` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    alias: String,
    url: String,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.alias, row.url)
    }
}

/// SQLite registry for alias storage and retrieval.
///
/// Uniqueness of `alias` is enforced by the table's `UNIQUE` constraint, so
/// concurrent inserts of the same alias are serialized by SQLite itself.
#[derive(Debug)]
pub struct SqliteAliasRegistry {
    pool: Arc<SqlitePool>,
}

impl SqliteAliasRegistry {
    /// Creates a registry over an already initialized pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (or creates) the store at `location` and applies the schema.
    ///
    /// `location` is either a filesystem path or an `sqlite:` URL. The file is
    /// created when missing, but its parent directory must exist.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageInit`] if the location cannot be opened or
    /// the schema cannot be applied.
    pub async fn open(location: &str, max_connections: u32) -> Result<Self, RegistryError> {
        let options = if location.starts_with("sqlite:") {
            SqliteConnectOptions::from_str(location).map_err(RegistryError::storage_init)?
        } else {
            SqliteConnectOptions::new().filename(location)
        };
        let options = options.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(RegistryError::storage_init)?;

        Self::initialize(&pool).await?;
        tracing::debug!(location, "Storage initialized");

        Ok(Self::new(Arc::new(pool)))
    }

    /// Opens a private in-memory store.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool holds a
    /// single connection that is never reaped.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageInit`] if the schema cannot be applied.
    pub async fn in_memory() -> Result<Self, RegistryError> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(RegistryError::storage_init)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(RegistryError::storage_init)?;

        Self::initialize(&pool).await?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Ensures the `url` table and its alias index exist.
    ///
    /// Safe to call against an already initialized store.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::StorageInit`] if a migration fails.
    pub async fn initialize(pool: &SqlitePool) -> Result<(), RegistryError> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(RegistryError::storage_init)
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl AliasRegistry for SqliteAliasRegistry {
    async fn save(&self, target: &str, alias: &str) -> Result<i64, RegistryError> {
        let result = sqlx::query("INSERT INTO url (url, alias) VALUES (?, ?)")
            .bind(target)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(RegistryError::AliasConflict {
                alias: alias.to_string(),
            }),
            Err(e) => Err(RegistryError::storage(e)),
        }
    }

    async fn get(&self, alias: &str) -> Result<String, RegistryError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(RegistryError::storage)?
            .ok_or_else(|| RegistryError::NotFound {
                alias: alias.to_string(),
            })
    }

    async fn list_all(&self) -> Result<Vec<UrlRecord>, RegistryError> {
        let rows = sqlx::query_as::<_, UrlRow>("SELECT id, alias, url FROM url ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(RegistryError::storage)?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn delete(&self, alias: &str) -> Result<bool, RegistryError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(RegistryError::storage)?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(RegistryError::storage)?;

        Ok(())
    }
}

//! CLI administration tool for url-alias.
//!
//! Manages aliases directly against the storage file, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Map a URL to a generated alias
//! cargo run --bin admin -- url add https://example.com
//!
//! # Map a URL to a chosen alias
//! cargo run --bin admin -- url add https://example.com --alias ex1
//!
//! # Resolve, list and delete
//! cargo run --bin admin -- url get ex1
//! cargo run --bin admin -- url list
//! cargo run --bin admin -- url delete ex1
//!
//! # Check storage
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (optional): SQLite file path (default: `./storage/storage.db`)
//! - `ALIAS_LENGTH` (optional): Length of generated aliases (default: 6, range: 4-32)

use url_alias::AppError;
use url_alias::application::services::UrlService;
use url_alias::config;
use url_alias::domain::repositories::AliasRegistry;
use url_alias::infrastructure::persistence::SqliteAliasRegistry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing url-alias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Map a URL to an alias
    Add {
        /// Target URL (http or https)
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Get { alias: String },

    /// List all aliases
    List,

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Storage diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check that storage opens and answers queries
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_admin_from_env()?;

    let registry = SqliteAliasRegistry::open(&config.storage_path, 1)
        .await
        .with_context(|| format!("Failed to open storage at {}", config.storage_path))?;

    match cli.command {
        Commands::Url { action } => {
            handle_url_action(action, registry, config.alias_length).await?
        }
        Commands::Db { action } => {
            handle_db_action(action, &registry, &config.storage_path).await?
        }
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(
    action: UrlAction,
    registry: SqliteAliasRegistry,
    alias_length: usize,
) -> Result<()> {
    let service = UrlService::new(Arc::new(registry), alias_length);

    match action {
        UrlAction::Add { url, alias } => add_url(&service, url, alias).await?,
        UrlAction::Get { alias } => get_url(&service, &alias).await?,
        UrlAction::List => list_urls(&service).await?,
        UrlAction::Delete { alias, yes } => delete_url(&service, &alias, yes).await?,
    }

    Ok(())
}

/// Saves a mapping using the same rules as `POST /url`.
async fn add_url(
    service: &UrlService<SqliteAliasRegistry>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Add URL".bright_blue().bold());
    println!();

    let alias = alias.filter(|a| !a.is_empty());
    let record = service
        .shorten(url, alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add url: {}", e))?;

    println!("  Alias: {}", record.alias.bright_yellow().bold());
    println!("  URL:   {}", record.target.cyan());
    println!();
    println!("{}", "✅ URL added".green().bold());

    Ok(())
}

async fn get_url(service: &UrlService<SqliteAliasRegistry>, alias: &str) -> Result<()> {
    let target = service
        .resolve(alias)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", alias, e))?;

    println!("{}", target);

    Ok(())
}

/// Lists all mappings in insertion order.
///
/// # Output Format
///
/// ```text
/// 📋 URLs
///
///   ID  Alias              URL
///   ────────────────────────────────────────────────
///   1   ex1                https://example.com
/// ```
async fn list_urls(service: &UrlService<SqliteAliasRegistry>) -> Result<()> {
    println!("{}", "📋 URLs".bright_blue().bold());
    println!();

    let records = service
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list urls: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No urls found".yellow());
        println!();
        println!(
            "  Add one with: {} admin url add <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<18} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<5} {:<18} {}",
            record.id.to_string().bright_black(),
            record.alias.cyan(),
            record.target
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a mapping after confirmation (default: No).
async fn delete_url(
    service: &UrlService<SqliteAliasRegistry>,
    alias: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete URL".bright_blue().bold());
    println!();

    match service.resolve(alias).await {
        Ok(target) => {
            println!("  Alias: {}", alias.cyan());
            println!("  URL:   {}", target.bright_black());
            println!();
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", "⚠️  No url stored under this alias".yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to look up url: {}", e)),
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this url?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete url: {}", e))?;

    println!("{}", "✅ URL deleted".green().bold());
    println!();

    Ok(())
}

/// Handles storage diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    registry: &SqliteAliasRegistry,
    storage_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking storage...".bright_blue());

            registry
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Storage check failed: {}", e))?;

            let count = registry
                .list_all()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count urls: {}", e))?
                .len();

            println!("{}", "✅ Storage OK".green().bold());
            println!("  Path: {}", storage_path.bright_white());
            println!("  URLs: {}", count.to_string().bright_green().bold());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn service() -> UrlService<SqliteAliasRegistry> {
        let registry = SqliteAliasRegistry::in_memory().await.unwrap();
        UrlService::new(Arc::new(registry), 6)
    }

    #[tokio::test]
    async fn test_delete_unknown_alias_is_ok() {
        let service = service().await;

        assert!(delete_url(&service, "missing", true).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_removes_alias() {
        let service = service().await;
        service
            .shorten("https://example.com".to_string(), Some("ex1".to_string()))
            .await
            .unwrap();

        delete_url(&service, "ex1", true).await.unwrap();

        assert!(matches!(
            service.resolve("ex1").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_reports_storage_failure() {
        let service = service().await;
        service.registry().pool().close().await;

        let err = delete_url(&service, "ex1", true).await.unwrap_err();
        assert!(err.to_string().contains("Failed to look up url"));
    }
}

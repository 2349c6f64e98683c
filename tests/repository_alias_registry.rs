use std::collections::HashSet;
use std::sync::Arc;

use url_alias::domain::error::RegistryError;
use url_alias::domain::repositories::AliasRegistry;
use url_alias::infrastructure::persistence::SqliteAliasRegistry;

async fn registry() -> SqliteAliasRegistry {
    SqliteAliasRegistry::in_memory().await.unwrap()
}

#[tokio::test]
async fn test_save_get_delete_lifecycle() {
    let registry = registry().await;

    let id = registry.save("https://example.com/a", "ex1").await.unwrap();
    assert_eq!(id, 1);

    assert_eq!(registry.get("ex1").await.unwrap(), "https://example.com/a");

    let err = registry
        .save("https://example.com/b", "ex1")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::AliasConflict { ref alias } if alias == "ex1"));
    assert_eq!(registry.get("ex1").await.unwrap(), "https://example.com/a");

    assert!(registry.delete("ex1").await.unwrap());

    let err = registry.get("ex1").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_ids_are_increasing() {
    let registry = registry().await;

    let first = registry.save("https://a.example", "a").await.unwrap();
    let second = registry.save("https://b.example", "b").await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_get_unknown_alias() {
    let registry = registry().await;

    let err = registry.get("missing").await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { ref alias } if alias == "missing"));
}

#[tokio::test]
async fn test_same_target_under_two_aliases() {
    let registry = registry().await;

    registry.save("https://example.com", "one").await.unwrap();
    registry.save("https://example.com", "two").await.unwrap();

    assert_eq!(registry.get("one").await.unwrap(), "https://example.com");
    assert_eq!(registry.get("two").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_aliases_are_case_sensitive() {
    let registry = registry().await;

    registry.save("https://lower.example", "abc").await.unwrap();
    registry.save("https://upper.example", "ABC").await.unwrap();

    assert_eq!(registry.get("abc").await.unwrap(), "https://lower.example");
    assert_eq!(registry.get("ABC").await.unwrap(), "https://upper.example");
}

#[tokio::test]
async fn test_target_stored_verbatim() {
    let registry = registry().await;
    let target = "https://Example.com/Path/?q=1&b=2#frag";

    registry.save(target, "raw").await.unwrap();

    assert_eq!(registry.get("raw").await.unwrap(), target);
}

#[tokio::test]
async fn test_delete_unknown_alias_succeeds() {
    let registry = registry().await;

    assert!(!registry.delete("never-existed").await.unwrap());
}

#[tokio::test]
async fn test_delete_twice() {
    let registry = registry().await;
    registry.save("https://example.com", "twice").await.unwrap();

    assert!(registry.delete("twice").await.unwrap());
    assert!(!registry.delete("twice").await.unwrap());
}

#[tokio::test]
async fn test_alias_reusable_after_delete() {
    let registry = registry().await;

    registry.save("https://old.example", "reuse").await.unwrap();
    registry.delete("reuse").await.unwrap();
    registry.save("https://new.example", "reuse").await.unwrap();

    assert_eq!(registry.get("reuse").await.unwrap(), "https://new.example");
}

#[tokio::test]
async fn test_list_all_in_insertion_order() {
    let registry = registry().await;

    assert!(registry.list_all().await.unwrap().is_empty());

    registry.save("https://a.example", "a").await.unwrap();
    registry.save("https://b.example", "b").await.unwrap();
    registry.save("https://c.example", "c").await.unwrap();
    registry.delete("b").await.unwrap();

    let records = registry.list_all().await.unwrap();
    let aliases: Vec<_> = records.iter().map(|r| r.alias.as_str()).collect();

    assert_eq!(aliases, ["a", "c"]);
    assert_eq!(records[1].target, "https://c.example");
}

#[tokio::test]
async fn test_ping() {
    let registry = registry().await;

    assert!(registry.ping().await.is_ok());
}

#[tokio::test]
async fn test_ping_after_pool_closed() {
    let registry = registry().await;
    registry.pool().close().await;

    let err = registry.ping().await.unwrap_err();
    assert!(matches!(err, RegistryError::Storage(_)));
}

#[tokio::test]
async fn test_concurrent_saves_of_same_alias() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.db");
    let registry = Arc::new(
        SqliteAliasRegistry::open(path.to_str().unwrap(), 4)
            .await
            .unwrap(),
    );

    let mut handles = Vec::new();
    for i in 0..8 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry
                .save(&format!("https://example.com/{i}"), "race")
                .await
        }));
    }

    let mut saved = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => saved += 1,
            Err(RegistryError::AliasConflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(saved, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(registry.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_saves_of_distinct_aliases() {
    let registry = Arc::new(registry().await);

    let mut handles = Vec::new();
    for i in 0..10 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry
                .save("https://example.com", &format!("alias{i}"))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_open_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.db");
    let location = path.to_str().unwrap();

    {
        let registry = SqliteAliasRegistry::open(location, 1).await.unwrap();
        registry.save("https://example.com", "keep").await.unwrap();
        registry.pool().close().await;
    }

    let registry = SqliteAliasRegistry::open(location, 1).await.unwrap();
    assert_eq!(registry.get("keep").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_open_accepts_sqlite_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("url.db");
    let location = format!("sqlite://{}", path.display());

    let registry = SqliteAliasRegistry::open(&location, 1).await.unwrap();

    assert!(registry.ping().await.is_ok());
    assert!(path.exists());
}

#[tokio::test]
async fn test_open_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("storage.db");

    let err = SqliteAliasRegistry::open(path.to_str().unwrap(), 1)
        .await
        .unwrap_err();

    assert!(matches!(err, RegistryError::StorageInit(_)));
}

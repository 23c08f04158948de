//! Store ownership resolution.
//!
//! One pure function answers the question every lifecycle operation asks
//! first: which store, if any, is this caller authorized to act on?

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::Store;

/// Resolve the single store the caller is authorized to act on.
///
/// With a store id, the store must exist **and** be owned by the caller; a
/// store owned by someone else resolves to `None`. Without one, the caller's
/// first store in storage order is returned. Read-only and policy-free:
/// callers decide what `None` means in context.
pub async fn resolve_store(
    repo: &Repository,
    caller_id: &str,
    store_id: Option<&str>,
) -> Result<Option<Store>, AppError> {
    match store_id {
        Some(id) => repo.find_store(id, caller_id).await,
        None => repo.find_first_store(caller_id).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn test_repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("test.sqlite"))
            .await
            .expect("Failed to init DB");
        (Repository::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_owner_resolves_own_store() {
        let (repo, _temp_dir) = test_repo().await;
        let store = repo.create_store("u1", "Acme").await.unwrap();

        let resolved = resolve_store(&repo, "u1", Some(&store.id)).await.unwrap();
        assert_eq!(resolved.map(|s| s.id), Some(store.id));
    }

    #[tokio::test]
    async fn test_other_caller_resolves_none() {
        let (repo, _temp_dir) = test_repo().await;
        let store = repo.create_store("u1", "Acme").await.unwrap();

        let resolved = resolve_store(&repo, "u2", Some(&store.id)).await.unwrap();
        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_no_store_id_returns_one_of_the_callers_stores() {
        let (repo, _temp_dir) = test_repo().await;
        repo.create_store("u1", "First").await.unwrap();
        repo.create_store("u1", "Second").await.unwrap();
        repo.create_store("u2", "Other").await.unwrap();

        let resolved = resolve_store(&repo, "u1", None).await.unwrap().unwrap();
        assert_eq!(resolved.owner_id, "u1");
    }

    #[tokio::test]
    async fn test_no_stores_resolves_none() {
        let (repo, _temp_dir) = test_repo().await;

        let resolved = resolve_store(&repo, "u1", None).await.unwrap();
        assert!(resolved.is_none());
    }
}

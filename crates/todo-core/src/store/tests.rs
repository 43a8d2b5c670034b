//! Storage Adapter Tests
//!
//! Tests for TodoStore over an in-memory key-value backend.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Query, TodoPatch};
    use crate::storage::{KeyValueStorage, MemoryStorage};
    use crate::store::{TodoRepository, TodoStore};

    const KEY: &str = "todos-test";

    fn setup_store() -> TodoStore<MemoryStorage> {
        TodoStore::new(MemoryStorage::new(), KEY)
    }

    #[tokio::test]
    async fn test_missing_document_is_empty() {
        let store = setup_store();
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_new_assigns_ids() {
        let store = setup_store();

        let first = store.save_new("  first ").await.expect("Failed to create");
        let second = store.save_new("second").await.expect("Failed to create");

        assert_eq!(first.id, 1);
        assert_eq!(first.title, "first");
        assert!(!first.completed);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_remove() {
        let store = setup_store();
        store.save_new("a").await.unwrap();
        let b = store.save_new("b").await.unwrap();

        store.remove(b.id).await.unwrap();
        let c = store.save_new("c").await.unwrap();

        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_document_format() {
        let storage = MemoryStorage::new();
        storage
            .set_item(KEY, r#"{"todos":[{"id":5,"title":"legacy","completed":true}]}"#)
            .unwrap();
        let store = TodoStore::new(storage, KEY);

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].completed);

        // lastId absent: continue after the highest stored id
        let next = store.save_new("next").await.unwrap();
        assert_eq!(next.id, 6);
    }

    #[tokio::test]
    async fn test_find_by_query() {
        let store = setup_store();
        let a = store.save_new("a").await.unwrap();
        let b = store.save_new("b").await.unwrap();
        store.save(b.id, &TodoPatch::completed(true)).await.unwrap();

        let active = store.find(&Query::Completed(false)).await.unwrap();
        assert_eq!(active, vec![a.clone()]);

        let done = store.find(&Query::Completed(true)).await.unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, b.id);

        let by_id = store.find(&Query::Id(a.id)).await.unwrap();
        assert_eq!(by_id, vec![a]);

        assert!(store.find(&Query::Id(99)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_patch() {
        let store = setup_store();
        let created = store.save_new("Original").await.unwrap();

        let updated = store
            .save(created.id, &TodoPatch::title("  Updated  "))
            .await
            .expect("Update failed");
        assert_eq!(updated.title, "Updated");
        assert!(!updated.completed);

        let found = store.find(&Query::Id(created.id)).await.unwrap();
        assert_eq!(found[0].title, "Updated");
    }

    #[tokio::test]
    async fn test_save_missing_is_not_found() {
        let store = setup_store();
        let result = store.save(42, &TodoPatch::completed(true)).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = setup_store();
        let created = store.save_new("To delete").await.unwrap();

        store.remove(created.id).await.expect("Delete failed");
        store.remove(created.id).await.expect("Second delete is a no-op");

        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_drop_all() {
        let store = setup_store();
        store.save_new("a").await.unwrap();
        store.save_new("b").await.unwrap();

        store.drop_all().await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        let after = store.save_new("c").await.unwrap();
        assert_eq!(after.id, 3);
    }

    #[tokio::test]
    async fn test_corrupt_document() {
        let storage = MemoryStorage::new();
        storage.set_item(KEY, "not json").unwrap();
        let store = TodoStore::new(storage, KEY);

        assert!(matches!(store.find_all().await, Err(DomainError::Internal(_))));

        store.drop_all().await.expect("drop recovers");
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_exhausted() {
        let storage = MemoryStorage::new();
        storage
            .set_item(KEY, r#"{"todos":[{"id":4294967295,"title":"x","completed":false}]}"#)
            .unwrap();
        let store = TodoStore::new(storage, KEY);

        let result = store.save_new("y").await;
        assert!(matches!(result, Err(DomainError::Internal(_))));
        assert_eq!(store.find_all().await.unwrap().len(), 1);

        // Dropping keeps lastId, so the id space stays exhausted
        store.drop_all().await.expect("drop at the id limit");
        assert!(store.find_all().await.unwrap().is_empty());
        assert!(matches!(
            store.save_new("z").await,
            Err(DomainError::Internal(_))
        ));
    }
}

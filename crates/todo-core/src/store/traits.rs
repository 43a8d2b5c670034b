//! Storage Adapter - Core Trait
//!
//! Defines the abstract interface the model persists through.
//! Implementations can use browser storage, in-memory maps, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Query, Todo, TodoPatch};

/// Record persistence for to-do items
///
/// All operations are async so a genuinely asynchronous backend can be
/// dropped in later. Futures are not `Send`: the app runs on the browser's
/// single thread.
#[async_trait(?Send)]
pub trait TodoRepository {
    /// Store a new incomplete record, assigning its id
    async fn save_new(&self, title: &str) -> DomainResult<Todo>;

    /// Merge `patch` into the record with `id`
    async fn save(&self, id: u32, patch: &TodoPatch) -> DomainResult<Todo>;

    /// Records matching `query`, in insertion order
    async fn find(&self, query: &Query) -> DomainResult<Vec<Todo>>;

    /// Every record, in insertion order
    async fn find_all(&self) -> DomainResult<Vec<Todo>>;

    /// Delete the record with `id`; absent ids are ignored
    async fn remove(&self, id: u32) -> DomainResult<()>;

    /// Delete every record
    async fn drop_all(&self) -> DomainResult<()>;
}

//! Model
//!
//! Thin layer over a `TodoRepository`: normalizes titles and queries and
//! derives the count summary.

use crate::domain::{DomainResult, Query, Todo, TodoCounts, TodoPatch};
use crate::store::TodoRepository;

pub struct Model<R> {
    repository: R,
}

impl<R: TodoRepository> Model<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create an incomplete record from a (trimmed) title
    pub async fn create(&self, title: &str) -> DomainResult<Todo> {
        self.repository.save_new(title.trim()).await
    }

    /// Records matching `query`, in insertion order
    pub async fn read(&self, query: impl Into<Query>) -> DomainResult<Vec<Todo>> {
        match query.into() {
            Query::All => self.repository.find_all().await,
            query => self.repository.find(&query).await,
        }
    }

    /// Read a single record by id
    pub async fn read_one(&self, id: u32) -> DomainResult<Option<Todo>> {
        Ok(self.read(id).await?.into_iter().next())
    }

    pub async fn update(&self, id: u32, patch: &TodoPatch) -> DomainResult<Todo> {
        self.repository.save(id, patch).await
    }

    pub async fn remove(&self, id: u32) -> DomainResult<()> {
        self.repository.remove(id).await
    }

    pub async fn remove_all(&self) -> DomainResult<()> {
        self.repository.drop_all().await
    }

    pub async fn get_count(&self) -> DomainResult<TodoCounts> {
        let todos = self.repository.find_all().await?;
        Ok(TodoCounts::from_todos(&todos))
    }
}

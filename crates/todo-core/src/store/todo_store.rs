//! Todo Store
//!
//! `TodoRepository` over a key-value backend. All records live in one JSON
//! document under a single key:
//!
//! ```json
//! {"todos":[{"id":1,"title":"a","completed":false}],"lastId":1}
//! ```
//!
//! Every mutation loads, edits and rewrites the whole document.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::traits::TodoRepository;
use crate::domain::{DomainError, DomainResult, Query, Todo, TodoPatch};
use crate::storage::KeyValueStorage;

#[derive(Debug, Default, Serialize, Deserialize)]
struct TodoDocument {
    todos: Vec<Todo>,
    /// Highest id ever handed out, so ids of deleted records are not reused
    #[serde(default, rename = "lastId")]
    last_id: u32,
}

impl TodoDocument {
    fn highest_id(&self) -> u32 {
        let highest = self.todos.iter().map(|todo| todo.id).max().unwrap_or(0);
        self.last_id.max(highest)
    }

    fn next_id(&self) -> DomainResult<u32> {
        self.highest_id()
            .checked_add(1)
            .ok_or_else(|| DomainError::Internal("todo ids exhausted".to_string()))
    }
}

/// JSON-document store keyed by name
pub struct TodoStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TodoStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// A missing document is an empty list
    fn load(&self) -> DomainResult<TodoDocument> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(TodoDocument::default()),
        }
    }

    fn persist(&self, document: &TodoDocument) -> DomainResult<()> {
        let raw = serde_json::to_string(document)?;
        self.storage.set_item(&self.key, &raw)
    }
}

#[async_trait(?Send)]
impl<S: KeyValueStorage> TodoRepository for TodoStore<S> {
    async fn save_new(&self, title: &str) -> DomainResult<Todo> {
        let mut document = self.load()?;
        let todo = Todo::new(document.next_id()?, title);
        document.last_id = todo.id;
        document.todos.push(todo.clone());
        self.persist(&document)?;
        log::debug!("[{}] saved new todo {}", self.key, todo.id);
        Ok(todo)
    }

    async fn save(&self, id: u32, patch: &TodoPatch) -> DomainResult<Todo> {
        let mut document = self.load()?;
        let todo = document
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| DomainError::todo_not_found(id))?;
        todo.apply(patch);
        let updated = todo.clone();
        self.persist(&document)?;
        Ok(updated)
    }

    async fn find(&self, query: &Query) -> DomainResult<Vec<Todo>> {
        let document = self.load()?;
        Ok(document
            .todos
            .into_iter()
            .filter(|todo| query.matches(todo))
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Todo>> {
        Ok(self.load()?.todos)
    }

    async fn remove(&self, id: u32) -> DomainResult<()> {
        let mut document = self.load()?;
        let before = document.todos.len();
        document.todos.retain(|todo| todo.id != id);
        if document.todos.len() != before {
            self.persist(&document)?;
        }
        Ok(())
    }

    /// Also recovers a corrupt document
    async fn drop_all(&self) -> DomainResult<()> {
        let last_id = self
            .load()
            .map(|document| document.highest_id())
            .unwrap_or_default();
        self.persist(&TodoDocument {
            todos: Vec::new(),
            last_id,
        })
    }
}

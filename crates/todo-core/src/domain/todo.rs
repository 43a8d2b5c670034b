//! Todo Entity
//!
//! A single to-do record plus its partial-update and summary types.

use serde::{Deserialize, Serialize};

/// A stored to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by the store on creation, never reused
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Create an incomplete record with a trimmed title
    pub fn new(id: u32, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            completed: false,
        }
    }

    /// Merge a patch into this record
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = &patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Partial update data; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

/// Count summary derived from the full record set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCounts {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

impl TodoCounts {
    pub fn from_todos(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|todo| todo.completed).count();
        Self {
            active: todos.len() - completed,
            completed,
            total: todos.len(),
        }
    }

    /// True when every record is completed (vacuously true for an empty list)
    pub fn all_completed(&self) -> bool {
        self.completed == self.total
    }
}

//! Record Queries
//!
//! What `Model::read` accepts: everything, one id, or a completion predicate.

use super::todo::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Query {
    #[default]
    All,
    Id(u32),
    Completed(bool),
}

impl Query {
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Query::All => true,
            Query::Id(id) => todo.id == *id,
            Query::Completed(completed) => todo.completed == *completed,
        }
    }
}

impl From<u32> for Query {
    fn from(id: u32) -> Self {
        Query::Id(id)
    }
}

//! Domain Layer
//!
//! Records, queries, routes and the shared error type.
//! No dependencies beyond serde.

mod error;
mod filter;
mod query;
mod todo;

pub use error::{DomainError, DomainResult};
pub use filter::{route_segment, Filter};
pub use query::Query;
pub use todo::{Todo, TodoCounts, TodoPatch};

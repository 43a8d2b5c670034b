//! Storage Adapter Layer
//!
//! Record persistence abstraction and its JSON-document implementation.

mod todo_store;
mod traits;

#[cfg(test)]
mod tests;

pub use todo_store::TodoStore;
pub use traits::TodoRepository;

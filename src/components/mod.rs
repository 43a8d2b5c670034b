//! UI Components
//!
//! The todo-mvc page sections.

mod footer;
mod header;
mod todo_item;
mod todo_list;

pub use footer::Footer;
pub use header::Header;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;

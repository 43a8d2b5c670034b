//! Todo Core
//!
//! Platform-independent half of the todo-mvc app: domain types, the JSON
//! storage adapter, the model and the controller. The Leptos frontend plugs
//! in a browser key-value backend and a DOM view.

pub mod config;
pub mod controller;
pub mod domain;
pub mod model;
pub mod storage;
pub mod store;
pub mod template;
pub mod view;

pub use config::AppConfig;
pub use controller::Controller;
pub use domain::{DomainError, DomainResult, Filter, Query, Todo, TodoCounts, TodoPatch};
pub use model::Model;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{TodoRepository, TodoStore};
pub use view::{RenderCommand, View, ViewEvent};

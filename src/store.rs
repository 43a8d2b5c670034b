//! View State Store
//!
//! Everything the DOM shows, held in a Leptos reactive store. Only
//! `DomView` writes it; components read it.

use reactive_stores::Store;
use todo_core::Todo;

/// Record currently in edit mode
#[derive(Clone, Debug, PartialEq)]
pub struct EditingTodo {
    pub id: u32,
    pub title: String,
}

#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Rows of the visible list
    pub entries: Vec<Todo>,
    pub active_count: usize,
    pub completed_count: usize,
    pub clear_completed_visible: bool,
    /// Main section and footer
    pub content_visible: bool,
    pub all_checked: bool,
    /// Selected route segment
    pub filter: String,
    pub new_todo: String,
    pub editing: Option<EditingTodo>,
}

pub type ViewStore = Store<ViewState>;

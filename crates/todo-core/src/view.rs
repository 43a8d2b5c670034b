//! View Contract
//!
//! What flows between the controller and whatever draws the list:
//! `ViewEvent`s come up from the DOM, `RenderCommand`s go down to it.

use crate::domain::Todo;

/// User intent reported by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// New-todo input committed
    NewTodo(String),
    /// Label double-clicked
    ItemEdit { id: u32 },
    /// Edit field committed (blur or Enter)
    ItemEditDone { id: u32, title: String },
    /// Escape pressed in the edit field
    ItemEditCancel { id: u32 },
    ItemRemove { id: u32 },
    ItemToggle { id: u32, completed: bool },
    RemoveCompleted,
    ToggleAll { completed: bool },
}

/// Instruction from the controller describing what to redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ShowEntries(Vec<Todo>),
    RemoveItem(u32),
    /// Number of active records
    UpdateElementCount(usize),
    ClearCompletedButton { completed: usize, visible: bool },
    /// Main section and footer
    ContentBlockVisibility { visible: bool },
    ToggleAll { checked: bool },
    /// Raw route segment, unmapped
    SetFilter(String),
    ClearNewTodo,
    ElementComplete { id: u32, completed: bool },
    EditItem { id: u32, title: String },
    EditItemDone { id: u32, title: String },
}

/// Applies render commands
pub trait View {
    fn render(&self, command: RenderCommand);
}

//! DOM View
//!
//! Applies controller render commands to the view store.

use leptos::prelude::Write;
use todo_core::{RenderCommand, View};

use crate::store::{EditingTodo, ViewStateStoreFields, ViewStore};

#[derive(Clone, Copy)]
pub struct DomView {
    state: ViewStore,
}

impl DomView {
    pub fn new(state: ViewStore) -> Self {
        Self { state }
    }
}

impl View for DomView {
    fn render(&self, command: RenderCommand) {
        let state = self.state;
        match command {
            RenderCommand::ShowEntries(entries) => *state.entries().write() = entries,
            RenderCommand::RemoveItem(id) => {
                state.entries().write().retain(|todo| todo.id != id);
                let editing_field = state.editing();
                let mut editing = editing_field.write();
                if matches!(&*editing, Some(edit) if edit.id == id) {
                    *editing = None;
                }
            }
            RenderCommand::UpdateElementCount(active) => *state.active_count().write() = active,
            RenderCommand::ClearCompletedButton { completed, visible } => {
                *state.completed_count().write() = completed;
                *state.clear_completed_visible().write() = visible;
            }
            RenderCommand::ContentBlockVisibility { visible } => {
                *state.content_visible().write() = visible;
            }
            RenderCommand::ToggleAll { checked } => *state.all_checked().write() = checked,
            RenderCommand::SetFilter(segment) => *state.filter().write() = segment,
            RenderCommand::ClearNewTodo => state.new_todo().write().clear(),
            RenderCommand::ElementComplete { id, completed } => {
                if let Some(todo) = state.entries().write().iter_mut().find(|todo| todo.id == id) {
                    todo.completed = completed;
                }
            }
            RenderCommand::EditItem { id, title } => {
                *state.editing().write() = Some(EditingTodo { id, title });
            }
            RenderCommand::EditItemDone { id, title } => {
                if let Some(todo) = state.entries().write().iter_mut().find(|todo| todo.id == id) {
                    todo.title = title;
                }
                let editing_field = state.editing();
                let mut editing = editing_field.write();
                if matches!(&*editing, Some(edit) if edit.id == id) {
                    *editing = None;
                }
            }
        }
    }
}

//! Todo List Component
//!
//! Main section: toggle-all checkbox and the visible rows.

use leptos::prelude::*;
use todo_core::template;
use todo_core::ViewEvent;

use super::TodoItem;
use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    view! {
        <section class="main" style:display=move || template::display(state.content_visible().get())>
            <input
                id="toggle-all"
                class="toggle-all"
                type="checkbox"
                prop:checked=move || state.all_checked().get()
                on:click=move |ev| {
                    ctx.dispatch(ViewEvent::ToggleAll { completed: event_target_checked(&ev) })
                }
            />
            <label for="toggle-all">"Mark all as complete"</label>
            <ul class="todo-list">
                // Any change to a row's content rebuilds that row
                <For
                    each=move || state.entries().get()
                    key=|todo| (todo.id, todo.title.clone(), todo.completed)
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </ul>
        </section>
    }
}

//! Header Component
//!
//! Title and new-todo input. `change` fires on Enter or when the input
//! loses focus.

use leptos::prelude::*;
use todo_core::ViewEvent;

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="header">
            <h1>"todos"</h1>
            <input
                class="new-todo"
                placeholder="What needs to be done?"
                autofocus=true
                prop:value=move || ctx.state.new_todo().get()
                on:input=move |ev| *ctx.state.new_todo().write() = event_target_value(&ev)
                on:change=move |ev| ctx.dispatch(ViewEvent::NewTodo(event_target_value(&ev)))
            />
        </header>
    }
}

//! Todo Item Component
//!
//! A single list row and its inline editor.

use leptos::html;
use leptos::prelude::*;
use todo_core::{template, Todo, ViewEvent};

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

const ENTER_KEY: &str = "Enter";
const ESCAPE_KEY: &str = "Escape";

/// A single row of the list
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;
    let is_editing = move || {
        ctx.state
            .editing()
            .get()
            .is_some_and(|edit| edit.id == id)
    };

    view! {
        <li data-id=id.to_string() class=move || template::item_class(completed, is_editing())>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    prop:checked=completed
                    on:click=move |ev| {
                        ctx.dispatch(ViewEvent::ItemToggle {
                            id,
                            completed: event_target_checked(&ev),
                        })
                    }
                />
                <label on:dblclick=move |_| ctx.dispatch(ViewEvent::ItemEdit { id })>
                    {todo.title}
                </label>
                <button class="destroy" on:click=move |_| ctx.dispatch(ViewEvent::ItemRemove { id })></button>
            </div>
            {move || {
                ctx.state
                    .editing()
                    .get()
                    .filter(|edit| edit.id == id)
                    .map(|edit| view! { <EditInput id=id title=edit.title /> })
            }}
        </li>
    }
}

/// Inline editor. Enter commits through blur; Escape cancels and
/// suppresses the commit the blur would otherwise send.
#[component]
fn EditInput(id: u32, title: String) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();
    let (cancelled, set_cancelled) = signal(false);

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let blur = move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.blur();
        }
    };

    view! {
        <input
            class="edit"
            node_ref=input_ref
            prop:value=title
            on:blur=move |ev| {
                if !cancelled.get_untracked() {
                    ctx.dispatch(ViewEvent::ItemEditDone {
                        id,
                        title: event_target_value(&ev),
                    });
                }
            }
            on:keypress=move |ev| {
                if ev.key() == ENTER_KEY {
                    blur();
                }
            }
            on:keyup=move |ev| {
                if ev.key() == ESCAPE_KEY {
                    set_cancelled.set(true);
                    blur();
                    ctx.dispatch(ViewEvent::ItemEditCancel { id });
                }
            }
        />
    }
}

//! Footer Component
//!
//! Remaining-items counter, filter links and the clear-completed button.

use leptos::prelude::*;
use todo_core::{template, Filter, ViewEvent};

use crate::context::use_app_context;
use crate::store::ViewStateStoreFields;

const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    view! {
        <footer class="footer" style:display=move || template::display(state.content_visible().get())>
            <span class="todo-count">
                <strong>{move || state.active_count().get()}</strong>
                " "
                {move || template::item_counter_suffix(state.active_count().get())}
            </span>
            <ul class="filters">
                {FILTERS.iter().map(|(filter, label)| {
                    let segment = filter.as_str();
                    let class = move || if state.filter().get() == segment { "selected" } else { "" };
                    view! {
                        <li>
                            <a href=format!("#/{}", segment) class=class>{*label}</a>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <button
                class="clear-completed"
                style:display=move || template::display(state.clear_completed_visible().get())
                on:click=move |_| ctx.dispatch(ViewEvent::RemoveCompleted)
            >
                {move || template::clear_completed_label(state.completed_count().get())}
            </button>
        </footer>
    }
}

//! Todo MVC App
//!
//! Wires storage, model, view and controller together and follows the
//! location hash.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{AppConfig, Controller, Model, TodoStore};

use crate::components::{Footer, Header, TodoList};
use crate::context::AppContext;
use crate::storage::LocalStorage;
use crate::store::ViewState;
use crate::view::DomView;

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let state = Store::new(ViewState::default());

    let store = TodoStore::new(LocalStorage, config.storage_key.clone());
    let controller = Controller::new(Model::new(store), DomView::new(state));
    log::info!("[App] todos stored under {:?}", config.storage_key);

    let ctx = AppContext::new(controller, state);
    provide_context(ctx);

    // Initial route, then every navigation
    ctx.route(current_hash());
    let _hashchange = window_event_listener(ev::hashchange, move |_| ctx.route(current_hash()));

    view! {
        <section class="todoapp">
            <Header />
            <TodoList />
            <Footer />
        </section>
        <footer class="info">
            <p>"Double-click to edit a todo"</p>
        </footer>
    }
}

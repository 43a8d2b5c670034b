//! Application Context
//!
//! The controller and view store, provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{Controller, TodoStore, ViewEvent};

use crate::storage::LocalStorage;
use crate::store::ViewStore;
use crate::view::DomView;

pub type AppController = Controller<TodoStore<LocalStorage>, DomView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Arc<AppController>>,
    /// What the DOM renders
    pub state: ViewStore,
}

impl AppContext {
    pub fn new(controller: AppController, state: ViewStore) -> Self {
        Self {
            controller: StoredValue::new(Arc::new(controller)),
            state,
        }
    }

    /// Hand a DOM event to the controller
    pub fn dispatch(&self, event: ViewEvent) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.handle(event).await;
        });
    }

    /// Re-route from a location fragment such as `#/active`
    pub fn route(&self, fragment: String) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            if let Err(e) = controller.set_view(&fragment).await {
                log::error!("[App] routing to {:?} failed: {}", fragment, e);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

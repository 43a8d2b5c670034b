//! Controller
//!
//! Turns `ViewEvent`s into model operations and re-renders the view after
//! every mutation. Owns the active route and the route the list was last
//! rendered for.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{route_segment, DomainError, DomainResult, Filter, Query, TodoPatch};
use crate::model::Model;
use crate::store::TodoRepository;
use crate::view::{RenderCommand, View, ViewEvent};


#[derive(Debug, Clone, Copy, Default)]
struct RouteState {
    active: Filter,
    /// `None` until the first refresh
    last: Option<Filter>,
}

pub struct Controller<R, V> {
    model: Model<R>,
    view: V,
    // Never held across an await
    routes: Mutex<RouteState>,
}

impl<R: TodoRepository, V: View> Controller<R, V> {
    pub fn new(model: Model<R>, view: V) -> Self {
        Self {
            model,
            view,
            routes: Mutex::new(RouteState::default()),
        }
    }

    pub fn active_filter(&self) -> Filter {
        self.routes().active
    }

    fn routes(&self) -> MutexGuard<'_, RouteState> {
        self.routes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Dispatch a view event. Failures are logged, not returned: the DOM
    /// layer has nowhere to put them.
    pub async fn handle(&self, event: ViewEvent) {
        log::debug!("[Controller] event {:?}", event);
        let result = match event {
            ViewEvent::NewTodo(title) => self.add_item(&title).await,
            ViewEvent::ItemEdit { id } => self.edit_item(id).await,
            ViewEvent::ItemEditDone { id, title } => self.edit_item_save(id, &title).await,
            ViewEvent::ItemEditCancel { id } => self.edit_item_cancel(id).await,
            ViewEvent::ItemRemove { id } => self.remove_item(id).await,
            ViewEvent::ItemToggle { id, completed } => {
                self.toggle_complete(id, completed, false).await
            }
            ViewEvent::RemoveCompleted => self.remove_completed_items().await,
            ViewEvent::ToggleAll { completed } => self.toggle_all(completed).await,
        };
        if let Err(e) = result {
            log::error!("[Controller] {}", e);
        }
    }

    /// Select the list filter from a location fragment (`''`, `#/`,
    /// `#/active`, `#/completed`).
    pub async fn set_view(&self, location_fragment: &str) -> DomainResult<()> {
        let segment = route_segment(location_fragment);
        self.routes().active = Filter::from_segment(segment);
        log::debug!("[Controller] route {:?} -> {:?}", location_fragment, self.active_filter());

        self.filter(false).await?;
        self.view.render(RenderCommand::SetFilter(segment.to_string()));
        Ok(())
    }

    /// Create a record unless the title is blank
    pub async fn add_item(&self, title: &str) -> DomainResult<()> {
        if title.trim().is_empty() {
            return Ok(());
        }

        let todo = self.model.create(title).await?;
        log::info!("[Controller] created todo {}", todo.id);
        self.view.render(RenderCommand::ClearNewTodo);
        self.filter(true).await
    }

    /// Put a record into edit mode
    pub async fn edit_item(&self, id: u32) -> DomainResult<()> {
        let todo = self
            .model
            .read_one(id)
            .await?
            .ok_or_else(|| DomainError::todo_not_found(id))?;
        self.view.render(RenderCommand::EditItem {
            id,
            title: todo.title,
        });
        Ok(())
    }

    /// Commit an edit; a blank title deletes the record
    pub async fn edit_item_save(&self, id: u32, title: &str) -> DomainResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return self.remove_item(id).await;
        }

        self.model.update(id, &TodoPatch::title(title)).await?;
        self.view.render(RenderCommand::EditItemDone {
            id,
            title: title.to_string(),
        });
        Ok(())
    }

    /// Leave edit mode, restoring the stored title
    pub async fn edit_item_cancel(&self, id: u32) -> DomainResult<()> {
        let todo = self
            .model
            .read_one(id)
            .await?
            .ok_or_else(|| DomainError::todo_not_found(id))?;
        self.view.render(RenderCommand::EditItemDone {
            id,
            title: todo.title,
        });
        Ok(())
    }

    pub async fn remove_item(&self, id: u32) -> DomainResult<()> {
        self.model.remove(id).await?;
        log::info!("[Controller] removed todo {}", id);
        self.view.render(RenderCommand::RemoveItem(id));
        self.filter(false).await
    }

    /// Remove every completed record one by one, then refresh once more
    pub async fn remove_completed_items(&self) -> DomainResult<()> {
        let completed = self.model.read(Query::Completed(true)).await?;
        for todo in completed {
            self.remove_item(todo.id).await?;
        }
        self.filter(false).await
    }

    /// Set a record's completed flag. `silent` skips the refresh, for
    /// batch toggles that refresh once at the end.
    pub async fn toggle_complete(&self, id: u32, completed: bool, silent: bool) -> DomainResult<()> {
        self.model.update(id, &TodoPatch::completed(completed)).await?;
        self.view
            .render(RenderCommand::ElementComplete { id, completed });

        if !silent {
            self.filter(false).await?;
        }
        Ok(())
    }

    /// Bring every record to `completed`, touching only those that differ
    pub async fn toggle_all(&self, completed: bool) -> DomainResult<()> {
        let pending = self.model.read(Query::Completed(!completed)).await?;
        for todo in pending {
            self.toggle_complete(todo.id, completed, true).await?;
        }
        self.filter(false).await
    }

    /// Refresh the counters and the parts of the page that depend on them
    async fn update_count(&self) -> DomainResult<()> {
        let counts = self.model.get_count().await?;

        self.view.render(RenderCommand::UpdateElementCount(counts.active));
        self.view.render(RenderCommand::ClearCompletedButton {
            completed: counts.completed,
            visible: counts.completed > 0,
        });
        self.view.render(RenderCommand::ToggleAll {
            checked: counts.all_completed(),
        });
        self.view.render(RenderCommand::ContentBlockVisibility {
            visible: counts.total > 0,
        });
        Ok(())
    }

    /// Refresh protocol run after every mutation.
    ///
    /// Counters always update. The list is re-fetched when `force` is set,
    /// or unless both the last rendered route and the active one are All.
    async fn filter(&self, force: bool) -> DomainResult<()> {
        self.update_count().await?;

        let RouteState { active, last } = *self.routes();
        let unchanged_all = last == Some(Filter::All) && active == Filter::All;
        if force || !unchanged_all {
            let entries = self.model.read(active.query()).await?;
            log::debug!("[Controller] showing {} entries for {:?}", entries.len(), active);
            self.view.render(RenderCommand::ShowEntries(entries));
        }

        self.routes().last = Some(active);
        Ok(())
    }
}

//! Tasks API Facade
//!
//! Binds the store port to the query cache: reads go through the cached
//! task-list query, mutations invalidate its tag on success so the next
//! read refetches from the server. A failed mutation leaves the cache
//! warm and is recorded on the console only.

use std::rc::Rc;

use leptos::prelude::*;

use crate::logging;
use crate::query::{CacheTag, QueryClient, TaskListQuery};
use crate::store::{CreateTaskArgs, HttpTaskStore, TaskStore};

/// Data-access runtime handed to the component tree.
///
/// The store lives in thread-local arena storage (the wasm HTTP client is
/// not `Send`), so the handle itself stays `Copy` like a signal.
pub struct TasksApi<S: TaskStore + 'static> {
    store: StoredValue<Rc<S>, LocalStorage>,
    queries: QueryClient,
    pub list: TaskListQuery,
}

/// The concrete runtime the app is wired with.
pub type Api = TasksApi<HttpTaskStore>;

impl<S: TaskStore + 'static> Clone for TasksApi<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: TaskStore + 'static> Copy for TasksApi<S> {}

impl<S: TaskStore + 'static> TasksApi<S> {
    pub fn new(store: S) -> Self {
        let queries = QueryClient::new();
        Self {
            store: StoredValue::new_local(Rc::new(store)),
            list: TaskListQuery::new(&queries),
            queries,
        }
    }

    #[cfg(test)]
    pub fn queries(&self) -> QueryClient {
        self.queries
    }

    #[cfg(test)]
    pub fn store(&self) -> Rc<S> {
        self.store.get_value()
    }

    /// Bring the cached task list up to date with its tag's epoch.
    pub async fn refresh_list(&self) {
        let store = self.store.get_value();
        self.list.refresh(store.as_ref()).await;
    }

    /// Append a task. The created record is not returned; the view picks
    /// it up through the forced refetch.
    pub async fn create_task(&self, args: &CreateTaskArgs<'_>) {
        let store = self.store.get_value();
        match store.create(args).await {
            Ok(_) => self.queries.invalidate(CacheTag::TaskList),
            Err(err) => logging::warn(&format!("create task failed: {}", err)),
        }
    }

    /// Set one task's `completed` field. Callers send the negation of the
    /// value they are rendering, so this is a toggle in practice.
    pub async fn set_task_completed(&self, id: u32, completed: bool) {
        let store = self.store.get_value();
        match store.set_completed(id, completed).await {
            Ok(_) => self.queries.invalidate(CacheTag::TaskList),
            Err(err) => logging::warn(&format!("update task {} failed: {}", id, err)),
        }
    }

    /// Remove one task.
    pub async fn delete_task(&self, id: u32) {
        let store = self.store.get_value();
        match store.delete(id).await {
            Ok(()) => self.queries.invalidate(CacheTag::TaskList),
            Err(err) => logging::warn(&format!("delete task {} failed: {}", id, err)),
        }
    }
}

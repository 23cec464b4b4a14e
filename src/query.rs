//! Query Cache Layer
//!
//! One named cache entry ("the task list") with tag-based invalidation.
//! Each tag owns an epoch counter signal; mutations that invalidate a tag
//! bump its epoch, and the query refetches when its fetched epoch falls
//! behind. Subscription is plain signal subscription.

use leptos::prelude::*;

use crate::logging;
use crate::models::Task;
use crate::store::TaskStore;

/// Labels attached to cached read results. Mutations declare which tags
/// they invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTag {
    TaskList,
}

/// Tag -> epoch registry shared by queries and mutations.
#[derive(Clone, Copy)]
pub struct QueryClient {
    task_list_epoch: RwSignal<u32>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            task_list_epoch: RwSignal::new(0),
        }
    }

    /// Epoch signal for a tag. Reading it inside an effect subscribes the
    /// effect to invalidations of that tag.
    pub fn epoch(&self, tag: CacheTag) -> RwSignal<u32> {
        match tag {
            CacheTag::TaskList => self.task_list_epoch,
        }
    }

    /// Force the next read of every query under `tag` to refetch.
    pub fn invalidate(&self, tag: CacheTag) {
        self.epoch(tag).update(|n| *n += 1);
    }
}

/// Subscriber-visible status of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed,
}

/// The cached task-list query.
///
/// Holds the last fetched snapshot and the epoch it was fetched at. While
/// the fetched epoch matches the tag's current epoch the cache is warm and
/// `refresh` is a no-op, so any number of subscribers share one fetch.
#[derive(Clone, Copy)]
pub struct TaskListQuery {
    state: RwSignal<QueryState<Vec<Task>>>,
    epoch: RwSignal<u32>,
    fetched_epoch: RwSignal<Option<u32>>,
}

impl TaskListQuery {
    pub fn new(queries: &QueryClient) -> Self {
        Self {
            state: RwSignal::new(QueryState::Loading),
            epoch: queries.epoch(CacheTag::TaskList),
            fetched_epoch: RwSignal::new(None),
        }
    }

    /// Epoch signal, for effects that drive `refresh`.
    pub fn epoch(&self) -> RwSignal<u32> {
        self.epoch
    }

    /// Fetch the list unless the cache is warm.
    ///
    /// The epoch is claimed before awaiting, so overlapping callers perform
    /// a single underlying request. A failed fetch flips the query to
    /// `Failed`; it never propagates into the caller.
    pub async fn refresh<S: TaskStore>(&self, store: &S) {
        let epoch = self.epoch.get_untracked();
        if self.fetched_epoch.get_untracked() == Some(epoch) {
            return;
        }
        self.fetched_epoch.set(Some(epoch));

        match store.list().await {
            Ok(tasks) => self.state.set(QueryState::Ready(tasks)),
            Err(err) => {
                logging::warn(&format!("task list fetch failed: {}", err));
                self.state.set(QueryState::Failed);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state.get(), QueryState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state.get(), QueryState::Failed)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state.get(), QueryState::Ready(_))
    }

    /// Current snapshot, `None` while loading or failed.
    pub fn data(&self) -> Option<Vec<Task>> {
        match self.state.get() {
            QueryState::Ready(tasks) => Some(tasks),
            _ => None,
        }
    }
}

//! Data-Access Layer Tests
//!
//! Exercises the synchronization layer (query cache + mutations +
//! invalidation) against an in-memory task store.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use leptos::prelude::*;

use crate::api::TasksApi;
use crate::models::Task;
use crate::query::CacheTag;
use crate::store::{CreateTaskArgs, StoreError, TaskStore};

/// In-memory stand-in for the remote task store.
#[derive(Default)]
struct MemoryTaskStore {
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<u32>,
    list_calls: Cell<u32>,
}

impl MemoryTaskStore {
    fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    fn seeded(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            tasks: RefCell::new(tasks),
            next_id: Cell::new(next_id),
            list_calls: Cell::new(0),
        }
    }

    fn list_calls(&self) -> u32 {
        self.list_calls.get()
    }
}

#[async_trait(?Send)]
impl TaskStore for MemoryTaskStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(self.tasks.borrow().clone())
    }

    async fn create(&self, args: &CreateTaskArgs<'_>) -> Result<Task, StoreError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let task = Task {
            id,
            text: args.text.to_string(),
            completed: args.completed,
        };
        self.tasks.borrow_mut().push(task.clone());
        Ok(task)
    }

    async fn set_completed(&self, id: u32, completed: bool) -> Result<Task, StoreError> {
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::Status(404))?;
        task.completed = completed;
        Ok(task.clone())
    }

    async fn delete(&self, id: u32) -> Result<(), StoreError> {
        self.tasks.borrow_mut().retain(|t| t.id != id);
        Ok(())
    }
}

/// Store whose every operation fails with a server error.
struct FailingStore;

#[async_trait(?Send)]
impl TaskStore for FailingStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Err(StoreError::Status(500))
    }

    async fn create(&self, _args: &CreateTaskArgs<'_>) -> Result<Task, StoreError> {
        Err(StoreError::Status(500))
    }

    async fn set_completed(&self, _id: u32, _completed: bool) -> Result<Task, StoreError> {
        Err(StoreError::Status(500))
    }

    async fn delete(&self, _id: u32) -> Result<(), StoreError> {
        Err(StoreError::Status(500))
    }
}

fn task(id: u32, text: &str, completed: bool) -> Task {
    Task {
        id,
        text: text.to_string(),
        completed,
    }
}

#[tokio::test]
async fn test_create_adds_one_record() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(MemoryTaskStore::seeded(vec![task(1, "first", true)]));
    api.refresh_list().await;
    let before = api.list.data().expect("list should be ready").len();

    api.create_task(&CreateTaskArgs { text: "buy milk", completed: false }).await;
    api.refresh_list().await;

    let tasks = api.list.data().expect("list should be ready");
    assert_eq!(tasks.len(), before + 1);
    assert!(tasks.iter().any(|t| t.text == "buy milk" && !t.completed));
}

#[tokio::test]
async fn test_toggle_negates_completed() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(MemoryTaskStore::seeded(vec![task(1, "buy milk", false)]));
    api.refresh_list().await;

    // The view dispatches the negation of the rendered value
    let rendered = api.list.data().expect("list should be ready")[0].completed;
    api.set_task_completed(1, !rendered).await;
    api.refresh_list().await;

    let after = &api.list.data().expect("list should be ready")[0];
    assert!(after.completed);
    assert_eq!(after.text, "buy milk");
}

#[tokio::test]
async fn test_delete_removes_only_target() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(MemoryTaskStore::seeded(vec![
        task(1, "first", false),
        task(2, "second", true),
        task(3, "third", false),
    ]));
    api.refresh_list().await;

    api.delete_task(2).await;
    api.refresh_list().await;

    let tasks = api.list.data().expect("list should be ready");
    assert_eq!(tasks, vec![task(1, "first", false), task(3, "third", false)]);
}

#[tokio::test]
async fn test_warm_cache_shares_one_fetch() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(MemoryTaskStore::seeded(vec![task(1, "first", false)]));
    api.refresh_list().await;
    let first = api.list.data();

    api.refresh_list().await;

    assert_eq!(api.store().list_calls(), 1);
    assert_eq!(api.list.data(), first);
}

#[tokio::test]
async fn test_mutation_invalidates_cache() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(MemoryTaskStore::new());
    api.refresh_list().await;
    assert_eq!(api.store().list_calls(), 1);
    assert_eq!(api.queries().epoch(CacheTag::TaskList).get_untracked(), 0);

    api.create_task(&CreateTaskArgs { text: "buy milk", completed: false }).await;
    assert_eq!(api.queries().epoch(CacheTag::TaskList).get_untracked(), 1);

    api.refresh_list().await;
    assert_eq!(api.store().list_calls(), 2);
}

#[tokio::test]
async fn test_failed_mutation_leaves_cache_warm() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(FailingStore);
    api.create_task(&CreateTaskArgs { text: "buy milk", completed: false }).await;
    api.set_task_completed(1, true).await;
    api.delete_task(1).await;

    // No invalidation, so no refetch gets triggered
    assert_eq!(api.queries().epoch(CacheTag::TaskList).get_untracked(), 0);
}

#[tokio::test]
async fn test_initial_fetch_failure_is_blocking_error() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(FailingStore);
    assert!(api.list.is_loading());

    api.refresh_list().await;

    assert!(api.list.is_error());
    assert!(!api.list.is_loading());
    assert!(!api.list.is_ready());
    assert_eq!(api.list.data(), None);
}

#[tokio::test]
async fn test_empty_draft_passes_through() {
    let owner = Owner::new();
    owner.set();

    let api = TasksApi::new(MemoryTaskStore::new());
    api.refresh_list().await;

    api.create_task(&CreateTaskArgs { text: "", completed: false }).await;
    api.refresh_list().await;

    let tasks = api.list.data().expect("list should be ready");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "");
}

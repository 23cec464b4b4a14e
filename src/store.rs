//! Remote Task Store Access
//!
//! The `TaskStore` port and its HTTP implementation. The port exists so the
//! synchronization layer can run against an in-memory store in tests.

use async_trait::async_trait;
use serde::Serialize;

use crate::models::Task;

// ========================
// Errors
// ========================

/// Failure of a remote store operation.
///
/// The view layer never branches on the variant; it exists for the log line.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store returned HTTP {0}")]
    Status(u16),
}

// ========================
// Request Argument Structs
// ========================

#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub text: &'a str,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct SetCompletedArgs {
    pub completed: bool,
}

// ========================
// Store Port
// ========================

/// The four remote operations against the task collection.
///
/// `?Send`: wasm futures are single-threaded.
#[async_trait(?Send)]
pub trait TaskStore {
    /// Fetch the full collection, in server order.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Append a task. The store assigns the id and returns the record.
    async fn create(&self, args: &CreateTaskArgs<'_>) -> Result<Task, StoreError>;

    /// Partial update of one task's `completed` field.
    async fn set_completed(&self, id: u32, completed: bool) -> Result<Task, StoreError>;

    /// Remove one task.
    async fn delete(&self, id: u32) -> Result<(), StoreError>;
}

// ========================
// HTTP Implementation
// ========================

/// `TaskStore` backed by the remote HTTP service.
pub struct HttpTaskStore {
    base: String,
    client: reqwest::Client,
}

impl HttpTaskStore {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn check(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(StoreError::Status(resp.status().as_u16()))
        }
    }
}

#[async_trait(?Send)]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let resp = self.client.get(self.url("/todos")).send().await?;
        Ok(Self::check(resp)?.json().await?)
    }

    async fn create(&self, args: &CreateTaskArgs<'_>) -> Result<Task, StoreError> {
        let resp = self.client.post(self.url("/todos")).json(args).send().await?;
        Ok(Self::check(resp)?.json().await?)
    }

    async fn set_completed(&self, id: u32, completed: bool) -> Result<Task, StoreError> {
        let resp = self
            .client
            .patch(self.url(&format!("/todos/{}", id)))
            .json(&SetCompletedArgs { completed })
            .send()
            .await?;
        Ok(Self::check(resp)?.json().await?)
    }

    async fn delete(&self, id: u32) -> Result<(), StoreError> {
        let resp = self.client.delete(self.url(&format!("/todos/{}", id))).send().await?;
        Self::check(resp)?;
        Ok(())
    }
}

//! Frontend Models
//!
//! Data structures matching the remote task store's records.

use serde::{Deserialize, Serialize};

/// Task record as served by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

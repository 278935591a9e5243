//! Task Entity
//!
//! A single to-do entry as stored in `todos.json`.

use serde::{Deserialize, Serialize};

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier
    pub id: String,
    /// Item text content
    pub text: String,
    /// Completion status
    pub done: bool,
    /// Rank among items with the same completion status
    pub order: i32,
}

/// Task as read from disk: every field may be missing, unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TaskRecord {
    pub id: Option<String>,
    pub text: Option<String>,
    pub done: Option<bool>,
    pub order: Option<i32>,
}

impl TaskRecord {
    /// Fill missing fields; `index` is the record's position in the loaded array
    pub fn into_task(self, index: usize) -> Task {
        Task {
            id: self.id.unwrap_or_else(new_task_id),
            text: self.text.unwrap_or_default(),
            done: self.done.unwrap_or(false),
            order: self.order.unwrap_or(index as i32),
        }
    }
}

/// Convert loaded records into tasks, keeping file order
pub fn normalize_records(records: Vec<TaskRecord>) -> Vec<Task> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_task(i))
        .collect()
}

fn new_task_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

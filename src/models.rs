//! Frontend Models
//!
//! Data structures matching backend records.

use serde::{Deserialize, Serialize};

/// Task record (matches backend `todos.json` entries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub order: i32,
}

/// Window preferences (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPrefs {
    pub x: i32,
    pub y: i32,
    pub pinned: bool,
}

#[cfg(test)]
pub fn task(id: &str, done: bool, order: i32) -> Task {
    Task {
        id: id.to_string(),
        text: format!("Task {}", id),
        done,
        order,
    }
}

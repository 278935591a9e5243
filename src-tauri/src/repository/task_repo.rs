//! Task Repository
//!
//! Persists the whole task list as `todos.json`.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{normalize_records, DomainResult, Task, TaskRecord};
use super::json_file::JsonFile;
use super::traits::DocumentRepository;

pub struct TaskRepository {
    file: JsonFile,
}

impl TaskRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    /// Parse a `todos.json` body; malformed documents yield `None`
    pub fn parse(text: &str) -> Option<Vec<Task>> {
        serde_json::from_str::<Vec<TaskRecord>>(text)
            .ok()
            .map(normalize_records)
    }
}

#[async_trait]
impl DocumentRepository<Vec<Task>> for TaskRepository {
    async fn load(&self) -> Vec<Task> {
        match self.file.read().await {
            Ok(Some(text)) => Self::parse(&text).unwrap_or_else(|| {
                log::warn!("{} is malformed, starting with an empty list", self.file.path().display());
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.file.path().display(), e);
                Vec::new()
            }
        }
    }

    async fn save(&self, tasks: &Vec<Task>) -> DomainResult<()> {
        self.file.write(tasks).await
    }
}

//! Tauri Commands for the task list
//!
//! The frontend always sends and receives the complete list.

use tauri::State;
use crate::domain::Task;
use crate::repository::DocumentRepository;
use crate::AppState;

/// Load the persisted list; empty when missing or unreadable
#[tauri::command]
pub async fn load_tasks(state: State<'_, AppState>) -> Result<Vec<Task>, String> {
    let tasks = state.tasks.load().await;
    log::info!("Loaded {} tasks", tasks.len());
    Ok(tasks)
}

/// Replace the persisted list. Errors are shown to the user, who may retry.
#[tauri::command]
pub async fn save_tasks(state: State<'_, AppState>, tasks: Vec<Task>) -> Result<(), String> {
    state.tasks.save(&tasks).await.map_err(|e| {
        let _ = rolling_logger::error(&format!("Saving {} tasks failed: {}", tasks.len(), e));
        e.to_string()
    })
}

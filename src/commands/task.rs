//! Task Commands
//!
//! Frontend bindings for loading and saving the task list.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Task;
use super::{invoke, js_error};

#[derive(Serialize)]
struct SaveTasksArgs<'a> {
    tasks: &'a [Task],
}

/// Persisted list; the host already falls back to an empty list
pub async fn load_tasks() -> Result<Vec<Task>, String> {
    let result = invoke("load_tasks", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Overwrite the persisted list
pub async fn save_tasks(tasks: &[Task]) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&SaveTasksArgs { tasks }).map_err(|e| e.to_string())?;
    invoke("save_tasks", js_args).await.map_err(js_error)?;
    Ok(())
}

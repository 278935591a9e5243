//! Window Commands
//!
//! Frontend bindings for window preferences, pinning and window controls.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::WindowPrefs;
use super::{invoke, js_error};

#[derive(Serialize)]
struct PinnedArgs {
    pinned: bool,
}

pub async fn load_window_prefs() -> Result<WindowPrefs, String> {
    let result = invoke("load_window_prefs", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Set always-on-top; the host also stores it in the window prefs
pub async fn set_pinned(pinned: bool) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&PinnedArgs { pinned }).map_err(|e| e.to_string())?;
    invoke("set_pinned", js_args).await.map_err(js_error)?;
    Ok(())
}

pub async fn query_pinned() -> Result<bool, String> {
    let result = invoke("query_pinned", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Fire-and-forget: the OS takes over until the mouse is released
pub async fn begin_window_drag() {
    let _ = invoke("begin_window_drag", JsValue::NULL).await;
}

pub async fn minimize_window() -> Result<(), String> {
    invoke("minimize_window", JsValue::NULL).await.map_err(js_error)?;
    Ok(())
}

pub async fn close_window() -> Result<(), String> {
    invoke("close_window", JsValue::NULL).await.map_err(js_error)?;
    Ok(())
}

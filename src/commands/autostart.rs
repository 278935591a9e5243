use wasm_bindgen::prelude::*;
use serde::Serialize;
use super::{invoke, js_error};

#[derive(Serialize)]
struct EnabledArgs {
    enabled: bool,
}

pub async fn query_autostart() -> Result<bool, String> {
    let result = invoke("query_autostart", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn set_autostart(enabled: bool) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&EnabledArgs { enabled }).map_err(|e| e.to_string())?;
    invoke("set_autostart", js_args).await.map_err(js_error)?;
    Ok(())
}

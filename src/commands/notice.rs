use wasm_bindgen::prelude::*;
use serde::Serialize;
use super::{invoke, js_error};

#[derive(Serialize)]
struct NoticeArgs<'a> {
    title: &'a str,
    message: &'a str,
}

/// Blocking error dialog owned by the host
pub async fn show_notice(title: &str, message: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&NoticeArgs { title, message }).map_err(|e| e.to_string())?;
    invoke("show_notice", js_args).await.map_err(js_error)?;
    Ok(())
}

//! Autostart Commands
//!
//! Registry access can block (and retries sleep), so it runs off the async workers.

use crate::autostart;

/// Whether launch-at-login is currently enabled; `false` when it can't be determined
#[tauri::command]
pub async fn query_autostart() -> Result<bool, String> {
    let result = tauri::async_runtime::spawn_blocking(autostart::is_autostart_enabled)
        .await
        .map_err(|e| e.to_string())?;
    Ok(result.unwrap_or_else(|e| {
        log::warn!("Autostart query failed: {}", e);
        false
    }))
}

/// Enable or disable launch-at-login
#[tauri::command]
pub async fn set_autostart(enabled: bool) -> Result<(), String> {
    tauri::async_runtime::spawn_blocking(move || autostart::set_autostart(enabled))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| {
            let _ = rolling_logger::error(&format!("Autostart change to {} failed: {}", enabled, e));
            e.to_string()
        })
}

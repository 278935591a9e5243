//! Window Commands
//!
//! Preference persistence, pinning, dragging and basic window controls.

use tauri::{AppHandle, Manager, State};
use crate::AppState;
use crate::constants::MAIN_WINDOW_LABEL;
use crate::domain::WindowPrefs;
use crate::repository::DocumentRepository;
use crate::window_placement::current_prefs;

fn main_window(app: &AppHandle) -> Result<tauri::WebviewWindow, String> {
    app.get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "Window not found".to_string())
}

/// Load window preferences (defaults on any failure)
#[tauri::command]
pub async fn load_window_prefs(state: State<'_, AppState>) -> Result<WindowPrefs, String> {
    Ok(state.window_prefs.load().await)
}

/// Save window preferences. Best-effort: failures are logged and returned.
#[tauri::command]
pub async fn save_window_prefs(state: State<'_, AppState>, prefs: WindowPrefs) -> Result<(), String> {
    state.window_prefs.save(&prefs).await.map_err(|e| {
        log::warn!("Failed to save window prefs: {}", e);
        e.to_string()
    })
}

/// Set window always-on-top state and remember it together with the current position
#[tauri::command]
pub async fn set_pinned(app: AppHandle, state: State<'_, AppState>, pinned: bool) -> Result<(), String> {
    let window = main_window(&app)?;
    window.set_always_on_top(pinned).map_err(|e| e.to_string())?;

    let saved = state.window_prefs.load().await;
    let prefs = WindowPrefs {
        pinned,
        ..current_prefs(&window, saved)
    };
    if let Err(e) = state.window_prefs.save(&prefs).await {
        log::warn!("Pinned state applied but not saved: {}", e);
    }
    Ok(())
}

/// Actual always-on-top state, used to confirm a pin toggle
#[tauri::command]
pub async fn query_pinned(app: AppHandle) -> Result<bool, String> {
    main_window(&app)?.is_always_on_top().map_err(|e| e.to_string())
}

/// Hand the borderless window over to the OS drag loop
#[tauri::command]
pub async fn begin_window_drag(app: AppHandle) -> Result<(), String> {
    main_window(&app)?.start_dragging().map_err(|e| e.to_string())
}

/// Minimize window
#[tauri::command]
pub async fn minimize_window(app: AppHandle) -> Result<(), String> {
    main_window(&app)?.minimize().map_err(|e| e.to_string())
}

/// Close window
#[tauri::command]
pub async fn close_window(app: AppHandle) -> Result<(), String> {
    main_window(&app)?.close().map_err(|e| e.to_string())
}

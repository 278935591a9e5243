//! Desktop Todolist Backend
//!
//! Layered architecture:
//! - domain: Task / window preference records and errors
//! - repository: JSON document persistence
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;

mod autostart;
mod commands;
mod constants;
mod domain;
mod repository;
mod window_placement;

use constants::{LOG_APP_NAME, MAIN_WINDOW_LABEL, TODOS_FILENAME, WINDOW_PREFS_FILENAME};
use domain::{DomainError, DomainResult};
use repository::{DocumentRepository, TaskRepository, WindowPrefsRepository};

/// Application state shared across commands
pub struct AppState {
    pub tasks: TaskRepository,
    pub window_prefs: Arc<WindowPrefsRepository>,
}

/// App data directory, created if needed
fn data_dir(app_handle: &tauri::AppHandle) -> DomainResult<PathBuf> {
    let dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| DomainError::Internal(format!("No app data dir: {}", e)))?;
    std::fs::create_dir_all(&dir).map_err(|e| DomainError::from_io("create app data dir", e))?;
    Ok(dir)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) {
                    let _ = window.unminimize();
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging; the app still runs without a log file
            match app_handle.path().app_log_dir() {
                Ok(log_dir) => {
                    if let Err(e) = rolling_logger::init_logger(log_dir, LOG_APP_NAME) {
                        eprintln!("Logger init failed: {}", e);
                    }
                }
                Err(e) => eprintln!("No log dir: {}", e),
            }

            let dir = data_dir(&app_handle)?;
            log::info!("Data dir: {}", dir.display());

            let window_prefs = Arc::new(WindowPrefsRepository::new(dir.join(WINDOW_PREFS_FILENAME)));
            app.manage(AppState {
                tasks: TaskRepository::new(dir.join(TODOS_FILENAME)),
                window_prefs: window_prefs.clone(),
            });

            // Restore placement before the first frame, then start tracking moves
            let prefs = tauri::async_runtime::block_on(window_prefs.load());
            window_placement::restore_main_window(&app_handle, &prefs);
            window_placement::watch_position(&app_handle, window_prefs);

            let _ = rolling_logger::info("App setup complete");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Task list
            commands::load_tasks,
            commands::save_tasks,
            // Window
            commands::load_window_prefs,
            commands::save_window_prefs,
            commands::set_pinned,
            commands::query_pinned,
            commands::begin_window_drag,
            commands::minimize_window,
            commands::close_window,
            // Autostart
            commands::query_autostart,
            commands::set_autostart,
            // Notifications
            commands::show_notice,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

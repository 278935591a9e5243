//! Host-side constants: file names, window geometry, timings.

use std::time::Duration;

/// Label of the single webview window in `tauri.conf.json`
pub const MAIN_WINDOW_LABEL: &str = "main";

pub const TODOS_FILENAME: &str = "todos.json";
pub const WINDOW_PREFS_FILENAME: &str = "window.json";

/// Fixed window size, must match `tauri.conf.json`
pub const WINDOW_WIDTH: u32 = 320;
pub const WINDOW_HEIGHT: u32 = 400;

pub const DEFAULT_WINDOW_X: i32 = 100;
pub const DEFAULT_WINDOW_Y: i32 = 100;

/// Quiet period after the last `Moved` event before the position is written
pub const MOVE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Name used for log files
pub const LOG_APP_NAME: &str = "DesktopTodolist";

/// Value name under the `Run` key
pub const AUTOSTART_VALUE_NAME: &str = "desktop-todolist";
pub const AUTOSTART_RUN_KEY: &str = "Software\\Microsoft\\Windows\\CurrentVersion\\Run";
pub const AUTOSTART_MAX_RETRIES: u32 = 3;
pub const AUTOSTART_RETRY_DELAY: Duration = Duration::from_millis(100);

//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod task_cmd;
mod window_cmd;
mod autostart_cmd;
mod notice_cmd;

pub use task_cmd::*;
pub use window_cmd::*;
pub use autostart_cmd::*;
pub use notice_cmd::*;

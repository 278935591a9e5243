//! Window Preferences
//!
//! Position and pinned (always-on-top) flag, persisted in `window.json`.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowPrefs {
    pub x: i32,
    pub y: i32,
    /// Older files call this `always_on_top`
    #[serde(alias = "always_on_top")]
    pub pinned: bool,
}

impl Default for WindowPrefs {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            pinned: true,
        }
    }
}

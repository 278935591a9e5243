//! Window Preferences Repository
//!
//! Manages window position/pinned persistence in `window.json`.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{DomainResult, WindowPrefs};
use super::json_file::JsonFile;
use super::traits::DocumentRepository;

pub struct WindowPrefsRepository {
    file: JsonFile,
}

impl WindowPrefsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl DocumentRepository<WindowPrefs> for WindowPrefsRepository {
    async fn load(&self) -> WindowPrefs {
        match self.file.read().await {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed window prefs: {}", e);
                WindowPrefs::default()
            }),
            Ok(None) => WindowPrefs::default(),
            Err(e) => {
                log::warn!("Failed to read window prefs: {}", e);
                WindowPrefs::default()
            }
        }
    }

    async fn save(&self, prefs: &WindowPrefs) -> DomainResult<()> {
        self.file.write(prefs).await
    }
}

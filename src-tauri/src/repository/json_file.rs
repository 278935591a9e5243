//! JSON Document File
//!
//! Reads and atomically writes a single JSON file (temp file, fsync, rename).
//! Writes to the same file are serialized through a mutex.

use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

pub struct JsonFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFile {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Raw contents, or `None` when the file does not exist yet
    pub async fn read(&self) -> DomainResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::from_io("read", e)),
        }
    }

    /// Serialize `value` and replace the file with it
    pub async fn write<T: Serialize + ?Sized>(&self, value: &T) -> DomainResult<()> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| DomainError::Serialization(e.to_string()))?;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::from_io("create data dir", e))?;
        }

        let tmp_path = self.temp_path();
        {
            let mut file = tokio::fs::File::create(&tmp_path)
                .await
                .map_err(|e| DomainError::from_io("create temp file", e))?;
            file.write_all(json.as_bytes())
                .await
                .map_err(|e| DomainError::from_io("write temp file", e))?;
            file.sync_all()
                .await
                .map_err(|e| DomainError::from_io("sync temp file", e))?;
        }

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(DomainError::from_io("replace document", e));
        }

        Ok(())
    }
}

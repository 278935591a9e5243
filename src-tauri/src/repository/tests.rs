//! Repository Integration Tests
//!
//! Tests for the JSON document repositories against a temp directory.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, Task, WindowPrefs};
    use crate::repository::{DocumentRepository, TaskRepository, WindowPrefsRepository};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup_dir() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().join("app-data");
        (dir, data_dir)
    }

    fn task(id: &str, text: &str, done: bool, order: i32) -> Task {
        Task { id: id.into(), text: text.into(), done, order }
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let (_dir, data_dir) = setup_dir();
        let repo = TaskRepository::new(data_dir.join("todos.json"));
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (_dir, data_dir) = setup_dir();
        let repo = TaskRepository::new(data_dir.join("todos.json"));
        let tasks = vec![task("a", "first", false, 0), task("b", "second", true, 1)];

        repo.save(&tasks).await.expect("Save failed");

        assert_eq!(repo.load().await, tasks);
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_document() {
        let (_dir, data_dir) = setup_dir();
        let repo = TaskRepository::new(data_dir.join("todos.json"));

        repo.save(&vec![task("a", "a", false, 0), task("b", "b", false, 1)]).await.unwrap();
        repo.save(&vec![task("c", "c", false, 0)]).await.unwrap();

        let loaded = repo.load().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
        assert!(!data_dir.join("todos.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let (_dir, data_dir) = setup_dir();
        std::fs::create_dir_all(&data_dir).unwrap();
        let path = data_dir.join("todos.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = TaskRepository::new(path);
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_loads_empty() {
        let (_dir, data_dir) = setup_dir();
        std::fs::create_dir_all(&data_dir).unwrap();
        let path = data_dir.join("todos.json");
        std::fs::write(&path, r#"{"todos":[]}"#).unwrap();

        let repo = TaskRepository::new(path);
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_is_reported() {
        let (_dir, data_dir) = setup_dir();
        std::fs::create_dir_all(&data_dir).unwrap();
        // A regular file where the parent directory should be
        let blocker = data_dir.join("blocked");
        std::fs::write(&blocker, "file").unwrap();

        let repo = TaskRepository::new(blocker.join("todos.json"));
        let err = repo.save(&vec![task("a", "a", false, 0)]).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Io(_) | DomainError::PermissionDenied(_) | DomainError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_window_prefs_default_when_absent() {
        let (_dir, data_dir) = setup_dir();
        let repo = WindowPrefsRepository::new(data_dir.join("window.json"));
        assert_eq!(repo.load().await, WindowPrefs::default());
    }

    #[tokio::test]
    async fn test_window_prefs_round_trip() {
        let (_dir, data_dir) = setup_dir();
        let repo = WindowPrefsRepository::new(data_dir.join("window.json"));
        let prefs = WindowPrefs { x: -40, y: 900, pinned: false };

        repo.save(&prefs).await.unwrap();
        repo.save(&WindowPrefs { x: 12, ..prefs }).await.unwrap();

        assert_eq!(repo.load().await, WindowPrefs { x: 12, y: 900, pinned: false });
    }

    #[tokio::test]
    async fn test_window_prefs_corrupt_file_uses_defaults() {
        let (_dir, data_dir) = setup_dir();
        std::fs::create_dir_all(&data_dir).unwrap();
        let path = data_dir.join("window.json");
        std::fs::write(&path, "[1,2,3]").unwrap();

        let repo = WindowPrefsRepository::new(path);
        assert_eq!(repo.load().await, WindowPrefs::default());
    }
}

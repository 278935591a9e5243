//! Repository Layer
//!
//! One JSON document per data category in the app data directory.

mod traits;
mod json_file;
mod task_repo;
mod window_prefs_repo;

#[cfg(test)]
mod tests;

pub use traits::DocumentRepository;
pub use task_repo::TaskRepository;
pub use window_prefs_repo::WindowPrefsRepository;

//! Domain Layer
//!
//! Task and window preference records plus the shared error type.
//! This layer has NO external dependencies (except serde/uuid for records).

mod error;
mod task;
mod window_prefs;

pub use error::{DomainError, DomainResult};
pub use task::{normalize_records, Task, TaskRecord};
pub use window_prefs::WindowPrefs;

//! Domain Errors
//!
//! Every host-side failure is one of these; commands turn them into strings
//! at the IPC boundary.

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    NotFound(String),
    PermissionDenied(String),
    Io(String),
    Serialization(String),
    Unsupported(String),
    Internal(String),
}

impl DomainError {
    /// Wrap an I/O error, keeping permission problems distinguishable
    pub fn from_io(context: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                DomainError::PermissionDenied(format!("{}: {}", context, err))
            }
            std::io::ErrorKind::NotFound => DomainError::NotFound(format!("{}: {}", context, err)),
            _ => DomainError::Io(format!("{}: {}", context, err)),
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            DomainError::Io(msg) => write!(f, "I/O error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            DomainError::Unsupported(msg) => write!(f, "Unsupported: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

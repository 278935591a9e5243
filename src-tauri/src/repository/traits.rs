//! Repository Layer - Core Traits
//!
//! A document repository owns one whole value on disk. There are no partial
//! updates: `save` always rewrites the full document.

use async_trait::async_trait;
use crate::domain::DomainResult;

#[async_trait]
pub trait DocumentRepository<T>: Send + Sync {
    /// Read the document. Never fails: absent or unreadable data yields the
    /// repository's fallback value.
    async fn load(&self) -> T;

    /// Overwrite the document with `value`
    async fn save(&self, value: &T) -> DomainResult<()>;
}

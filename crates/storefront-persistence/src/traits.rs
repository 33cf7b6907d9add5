use async_trait::async_trait;
use std::path::Path;
use storefront_core::StorefrontResult;
use storefront_domain::CatalogEntry;

/// Trait for abstract catalog storage.
/// Implementations handle different backends (file, database, etc.)
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load every catalog entry, in stored order
    async fn load(&self) -> StorefrontResult<Vec<CatalogEntry>>;

    /// Replace the stored catalog
    async fn save(&self, entries: &[CatalogEntry]) -> StorefrontResult<()>;

    /// Check if the store file exists
    async fn exists(&self) -> bool;

    /// Get the path to the store file
    fn path(&self) -> &Path;
}

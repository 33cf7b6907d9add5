use crate::store::atomic_writer::AtomicWriter;
use crate::traits::CatalogStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_core::{StorefrontError, StorefrontResult};
use storefront_domain::CatalogEntry;

pub const CATALOG_FORMAT_VERSION: u32 = 1;

/// JSON file-based catalog store
#[derive(Debug, Clone)]
pub struct JsonCatalogStore {
    path: PathBuf,
}

/// On-disk layout of a catalog file
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogEnvelope {
    pub version: u32,
    #[serde(default)]
    pub products: Vec<CatalogEntry>,
}

impl CatalogEnvelope {
    pub fn new(products: Vec<CatalogEntry>) -> Self {
        Self {
            version: CATALOG_FORMAT_VERSION,
            products,
        }
    }

    pub fn to_json_string(&self) -> StorefrontResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| StorefrontError::Serialization(e.to_string()))
    }
}

impl JsonCatalogStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl CatalogStore for JsonCatalogStore {
    async fn load(&self) -> StorefrontResult<Vec<CatalogEntry>> {
        if !self.exists().await {
            return Err(StorefrontError::NotFound(format!(
                "catalog file {}",
                self.path.display()
            )));
        }

        let bytes = AtomicWriter::read_all(&self.path).await?;
        let envelope: CatalogEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| StorefrontError::Serialization(e.to_string()))?;

        if envelope.version != CATALOG_FORMAT_VERSION {
            return Err(StorefrontError::Serialization(format!(
                "Unsupported catalog version: {}",
                envelope.version
            )));
        }

        tracing::info!(
            "Loaded {} products from {}",
            envelope.products.len(),
            self.path.display()
        );
        Ok(envelope.products)
    }

    async fn save(&self, entries: &[CatalogEntry]) -> StorefrontResult<()> {
        let envelope = CatalogEnvelope::new(entries.to_vec());
        let json = envelope.to_json_string()?;
        AtomicWriter::write_atomic(&self.path, json.as_bytes()).await?;

        tracing::info!(
            "Saved {} products to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_domain::LocalizedText;
    use tempfile::tempdir;

    fn sample_entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new(LocalizedText::new("Teapot").with_fa("قوری"), 1200),
            CatalogEntry::new(LocalizedText::new("Kettle"), 900),
        ]
    }

    #[tokio::test]
    async fn test_save_then_load_keeps_order() {
        let dir = tempdir().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("catalog.json"));
        let entries = sample_entries();

        store.save(&entries).await.unwrap();
        assert!(store.exists().await);

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, entries[0].id);
        assert_eq!(loaded[0].name.fa.as_deref(), Some("قوری"));
        assert_eq!(loaded[1].price, 900);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonCatalogStore::new(dir.path().join("absent.json"));

        assert!(!store.exists().await);
        assert!(matches!(store.load().await, Err(StorefrontError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"version": 7, "products": []}"#).unwrap();

        let result = JsonCatalogStore::new(&path).load().await;
        assert!(matches!(result, Err(StorefrontError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();

        let result = JsonCatalogStore::new(&path).load().await;
        assert!(matches!(result, Err(StorefrontError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_hand_written_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "version": 1,
                "products": [
                    {"id": "6f1c1f3e-8a3b-4b0e-9a55-0b1f1c2d3e4f", "name": {"en": "Lamp"}, "price": 4500}
                ]
            }"#,
        )
        .unwrap();

        let loaded = JsonCatalogStore::new(&path).load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name.en, "Lamp");
        assert!(loaded[0].image.is_none());
    }
}

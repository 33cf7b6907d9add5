use std::sync::Arc;

use storefront_core::{AppConfig, StorefrontError, StorefrontResult};
use storefront_domain::{InMemoryCatalog, Locale, PriceCeiling, ProductQuery};
use storefront_persistence::{CatalogStore, JsonCatalogStore};

use crate::cli::QueryArgs;

/// Everything a command needs: the loaded catalog and the resolved query inputs.
pub struct CliContext {
    pub config: AppConfig,
    pub catalog: Arc<InMemoryCatalog>,
    pub lang: Locale,
    pub search: Option<String>,
    pub filter: PriceCeiling,
}

impl CliContext {
    pub async fn load(file_path: &str, args: QueryArgs, config: AppConfig) -> StorefrontResult<Self> {
        let store = JsonCatalogStore::new(file_path);
        let entries = store.load().await?;
        let catalog = InMemoryCatalog::new(entries).with_latency(config.effective_fetch_latency());

        let lang = match args.lang {
            Some(lang) => lang,
            None => config.effective_default_lang().parse()?,
        };
        let filter: PriceCeiling = match args.filter.as_deref() {
            Some(raw) => raw.parse()?,
            None => PriceCeiling(config.effective_max_price()),
        };
        let search = args
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            lang,
            search,
            filter,
        })
    }

    pub fn page_size(&self) -> usize {
        self.config.effective_page_size()
    }

    pub fn query(&self, limit: usize) -> StorefrontResult<ProductQuery> {
        if limit == 0 {
            return Err(StorefrontError::Validation(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(ProductQuery::new(self.lang, limit)
            .with_search(self.search.clone())
            .with_filter(self.filter))
    }
}

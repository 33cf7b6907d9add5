//! Product sources.
//!
//! A source answers a [`ProductQuery`] with a [`ProductPage`]. It is the only
//! I/O boundary the gallery talks to.

use std::time::Duration;

use async_trait::async_trait;
use storefront_core::StorefrontResult;

use crate::filter::{CompositeFilter, PriceCeilingFilter, ProductFilter};
use crate::search::{ProductSearcher, TitleSearcher};
use crate::{CatalogEntry, ProductPage, ProductQuery};

#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch(&self, query: &ProductQuery) -> StorefrontResult<ProductPage>;
}

/// Serves queries from a catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: Vec<CatalogEntry>,
    latency: Duration,
}

impl InMemoryCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            latency: Duration::ZERO,
        }
    }

    /// Delay every reply by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer a query without waiting.
    pub fn query(&self, query: &ProductQuery) -> ProductPage {
        let searcher = TitleSearcher::new(query.search.clone().unwrap_or_default());
        let filter =
            CompositeFilter::new().with_filter(Box::new(PriceCeilingFilter::new(query.filter)));

        let matches: Vec<_> = self
            .entries
            .iter()
            .map(|entry| entry.localize(query.lang))
            .filter(|product| searcher.matches(product) && filter.matches(product))
            .collect();

        let total = matches.len();
        let items = matches.into_iter().take(query.limit).collect();
        ProductPage { items, total }
    }
}

#[async_trait]
impl ProductSource for InMemoryCatalog {
    async fn fetch(&self, query: &ProductQuery) -> StorefrontResult<ProductPage> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let page = self.query(query);
        tracing::debug!(
            lang = %query.lang,
            limit = query.limit,
            returned = page.items.len(),
            total = page.total,
            "catalog query answered"
        );
        Ok(page)
    }
}

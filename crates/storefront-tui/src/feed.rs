//! Reactive product fetching.
//!
//! `ProductFeed` owns the fetch snapshot the gallery renders. Each request
//! runs as a background task that posts its reply back onto the event
//! queue; only the reply to the most recent request is applied, so late or
//! out-of-order replies are dropped instead of overwriting newer data.

use std::sync::Arc;

use chrono::Utc;
use storefront_domain::{FetchError, FetchResult, ProductPage, ProductQuery, ProductSource, QueryKey};
use tokio::sync::mpsc;

use crate::events::Event;

/// A source reply tagged with the request that produced it.
#[derive(Debug)]
pub struct FeedEvent {
    pub generation: u64,
    pub outcome: Result<ProductPage, FetchError>,
}

pub struct ProductFeed {
    source: Arc<dyn ProductSource>,
    tx: mpsc::UnboundedSender<Event>,
    generation: u64,
    key: Option<QueryKey>,
    result: FetchResult,
}

impl ProductFeed {
    pub fn new(source: Arc<dyn ProductSource>, tx: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            source,
            tx,
            generation: 0,
            key: None,
            result: FetchResult::default(),
        }
    }

    pub fn result(&self) -> &FetchResult {
        &self.result
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start fetching `query`.
    ///
    /// A new query key discards the previous snapshot; a limit-only change
    /// keeps the last-known items on screen while the larger page loads.
    pub fn request(&mut self, query: ProductQuery) {
        let key = query.key();
        if self.key.as_ref() != Some(&key) {
            self.result = FetchResult::loading();
            self.key = Some(key);
        } else {
            self.result.is_loading = true;
        }

        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        tracing::debug!(generation, limit = query.limit, lang = %query.lang, "fetch requested");

        tokio::spawn(async move {
            let outcome = source.fetch(&query).await.map_err(FetchError::from);
            if tx.send(Event::Fetched(FeedEvent { generation, outcome })).is_err() {
                tracing::debug!(generation, "event queue closed before fetch completed");
            }
        });
    }

    /// Apply a reply. Returns false if it was stale and ignored.
    pub fn apply(&mut self, event: FeedEvent) -> bool {
        if event.generation != self.generation {
            tracing::debug!(
                stale = event.generation,
                current = self.generation,
                "dropping superseded fetch reply"
            );
            return false;
        }

        self.result.is_loading = false;
        match event.outcome {
            Ok(page) => {
                tracing::info!(items = page.items.len(), total = page.total, "products loaded");
                self.result.items = Some(page.items);
                self.result.total = page.total;
                self.result.error = None;
                self.result.fetched_at = Some(Utc::now());
            }
            Err(error) => {
                tracing::warn!("product fetch failed: {}", error.message);
                self.result.error = Some(error);
            }
        }
        true
    }
}

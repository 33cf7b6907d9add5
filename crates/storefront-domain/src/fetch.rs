use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::StorefrontError;

use crate::Product;

/// One reply from a product source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    /// The first `limit` matching products, in catalog order.
    pub items: Vec<Product>,
    /// Number of matching products before truncation.
    pub total: usize,
}

/// A failed fetch, carried as a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<StorefrontError> for FetchError {
    fn from(err: StorefrontError) -> Self {
        Self::new(err.to_string())
    }
}

/// Read-only snapshot of the data-fetching state.
#[derive(Debug, Clone, Default)]
pub struct FetchResult {
    /// `None` until a reply for the current query key has landed.
    pub items: Option<Vec<Product>>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub total: usize,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl FetchResult {
    /// A snapshot with a request outstanding and nothing known yet.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[Product] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn item_count(&self) -> usize {
        self.items().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_snapshot() {
        let result = FetchResult::loading();
        assert!(result.is_loading);
        assert!(result.items.is_none());
        assert_eq!(result.item_count(), 0);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_fetch_error_from_storefront_error() {
        let err: FetchError = StorefrontError::Fetch("timeout".into()).into();
        assert_eq!(err.message, "Fetch failed: timeout");
    }
}

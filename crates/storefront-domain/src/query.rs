use serde::{Deserialize, Serialize};

use crate::filter::PriceCeiling;
use crate::locale::Locale;

/// Everything a product source needs to answer one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub lang: Locale,
    pub limit: usize,
    pub search: Option<String>,
    pub filter: PriceCeiling,
}

/// The query minus its limit. Two queries with the same key page through
/// the same result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub lang: Locale,
    pub search: Option<String>,
    pub filter: PriceCeiling,
}

impl ProductQuery {
    pub fn new(lang: Locale, limit: usize) -> Self {
        Self {
            lang,
            limit,
            search: None,
            filter: PriceCeiling::default(),
        }
    }

    /// Set the search text. Blank text means no search.
    pub fn with_search(mut self, search: Option<impl Into<String>>) -> Self {
        self.search = search
            .map(Into::into)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }

    pub fn with_filter(mut self, filter: PriceCeiling) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn key(&self) -> QueryKey {
        QueryKey {
            lang: self.lang,
            search: self.search.clone(),
            filter: self.filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_is_none() {
        let query = ProductQuery::new(Locale::En, 20).with_search(Some("   "));
        assert!(query.search.is_none());

        let query = ProductQuery::new(Locale::En, 20).with_search(Some("  mug "));
        assert_eq!(query.search.as_deref(), Some("mug"));
    }

    #[test]
    fn test_key_ignores_limit() {
        let a = ProductQuery::new(Locale::Fa, 20).with_search(Some("mug"));
        let b = a.clone().with_limit(40);
        assert_eq!(a.key(), b.key());

        let c = a.clone().with_filter(PriceCeiling(10));
        assert_ne!(a.key(), c.key());
    }
}

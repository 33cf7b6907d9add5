//! Product search.
//!
//! Searches the localized product name, case-insensitively.

use crate::Product;

/// Trait for searching products by various criteria.
pub trait ProductSearcher {
    /// Returns true if the product matches the search criteria.
    fn matches(&self, product: &Product) -> bool;
}

/// Search products by name (case-insensitive substring).
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    /// Create a new title searcher with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().trim().to_lowercase(),
        }
    }

    /// Get the normalized search query.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl ProductSearcher for TitleSearcher {
    fn matches(&self, product: &Product) -> bool {
        if self.query.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn product(name: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: 10,
            image: None,
        }
    }

    #[test]
    fn test_title_searcher_matches() {
        let item = product("Ceramic Coffee Mug");

        assert!(TitleSearcher::new("mug").matches(&item));
        assert!(TitleSearcher::new("COFFEE").matches(&item));
        assert!(!TitleSearcher::new("teapot").matches(&item));
    }

    #[test]
    fn test_title_searcher_empty_query() {
        let searcher = TitleSearcher::new("   ");
        assert_eq!(searcher.query(), "");
        assert!(searcher.matches(&product("Anything")));
    }

    #[test]
    fn test_title_searcher_persian() {
        let item = product("قوری چینی");
        assert!(TitleSearcher::new("قوری").matches(&item));
    }
}

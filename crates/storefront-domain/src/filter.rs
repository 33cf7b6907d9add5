//! Product filtering.
//!
//! The gallery filters by a price ceiling; filters compose with AND logic.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_core::StorefrontError;

use crate::Product;

/// Price ceiling applied when no filter is given.
pub const PRODUCT_MAX_PRICE: u64 = 100_000_000;

/// Inclusive upper bound on product price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceCeiling(pub u64);

impl PriceCeiling {
    /// Parse the optional filter string, defaulting to [`PRODUCT_MAX_PRICE`].
    pub fn parse(filter: Option<&str>) -> Result<Self, StorefrontError> {
        match filter {
            None => Ok(Self::default()),
            Some(raw) => raw.parse(),
        }
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for PriceCeiling {
    fn default() -> Self {
        Self(PRODUCT_MAX_PRICE)
    }
}

impl FromStr for PriceCeiling {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| StorefrontError::Validation(format!("invalid price filter '{trimmed}'")))
    }
}

/// Trait for filtering products by various criteria.
pub trait ProductFilter: Send + Sync {
    /// Returns true if the product matches the filter criteria.
    fn matches(&self, product: &Product) -> bool;
}

/// Keep products priced at or below the ceiling.
pub struct PriceCeilingFilter {
    ceiling: PriceCeiling,
}

impl PriceCeilingFilter {
    pub fn new(ceiling: PriceCeiling) -> Self {
        Self { ceiling }
    }
}

impl ProductFilter for PriceCeilingFilter {
    fn matches(&self, product: &Product) -> bool {
        product.price <= self.ceiling.value()
    }
}

/// Combine multiple filters with AND logic.
#[derive(Default)]
pub struct CompositeFilter {
    filters: Vec<Box<dyn ProductFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all products).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn ProductFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl ProductFilter for CompositeFilter {
    fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|filter| filter.matches(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn product(price: u64) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Lamp".to_string(),
            price,
            image: None,
        }
    }

    #[test]
    fn test_parse_defaults_to_max_price() {
        assert_eq!(PriceCeiling::parse(None).unwrap(), PriceCeiling(PRODUCT_MAX_PRICE));
        assert_eq!(PriceCeiling::parse(Some("  ")).unwrap(), PriceCeiling(PRODUCT_MAX_PRICE));
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(PriceCeiling::parse(Some("2500")).unwrap(), PriceCeiling(2500));
        assert_eq!(" 7 ".parse::<PriceCeiling>().unwrap(), PriceCeiling(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            PriceCeiling::parse(Some("cheap")),
            Err(StorefrontError::Validation(_))
        ));
        assert!(PriceCeiling::parse(Some("-5")).is_err());
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let filter = PriceCeilingFilter::new(PriceCeiling(100));
        assert!(filter.matches(&product(99)));
        assert!(filter.matches(&product(100)));
        assert!(!filter.matches(&product(101)));
    }

    #[test]
    fn test_composite_and_logic() {
        let empty = CompositeFilter::new();
        assert!(empty.is_empty());
        assert!(empty.matches(&product(5)));

        let composite = CompositeFilter::new()
            .with_filter(Box::new(PriceCeilingFilter::new(PriceCeiling(100))))
            .with_filter(Box::new(PriceCeilingFilter::new(PriceCeiling(50))));
        assert!(composite.matches(&product(50)));
        assert!(!composite.matches(&product(75)));
    }
}

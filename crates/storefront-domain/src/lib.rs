pub mod fetch;
pub mod filter;
pub mod locale;
pub mod product;
pub mod query;
pub mod search;
pub mod source;

pub use fetch::{FetchError, FetchResult, ProductPage};
pub use filter::{CompositeFilter, PriceCeiling, PriceCeilingFilter, ProductFilter, PRODUCT_MAX_PRICE};
pub use locale::Locale;
pub use product::{CatalogEntry, LocalizedText, Product, ProductId};
pub use query::{ProductQuery, QueryKey};
pub use search::{ProductSearcher, TitleSearcher};
pub use source::{InMemoryCatalog, ProductSource};

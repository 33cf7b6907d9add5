pub mod config;
pub mod error;
pub mod pagination;
pub mod result;

pub use config::AppConfig;
pub use error::StorefrontError;
pub use pagination::{PaginationController, VisibilityEdge, PRODUCTS_PER_PAGE};
pub use result::StorefrontResult;

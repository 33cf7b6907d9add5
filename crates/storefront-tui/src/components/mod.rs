pub mod alert;
pub mod banner;
pub mod loader;
pub mod popup;
pub mod product_card;

pub use alert::*;
pub use banner::*;
pub use loader::*;
pub use popup::*;
pub use product_card::*;

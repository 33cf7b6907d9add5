pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod feed;
pub mod gallery;
pub mod input;
pub mod theme;
pub mod transition;
pub mod ui;
pub mod viewport;

pub use app::{App, AppMode, GallerySettings};
pub use events::{Event, EventHandler};
pub use feed::{FeedEvent, ProductFeed};
pub use gallery::{select_view, CardKey, CardSlot, GalleryBody, GalleryView};

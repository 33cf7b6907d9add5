//! View selection for the product gallery.
//!
//! Turns a fetch snapshot into what the gallery should show. Pure: no
//! terminal, no clock, no I/O.

use storefront_domain::{FetchResult, Locale, Product, ProductId};

/// Identity of a grid cell across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKey {
    Product(ProductId),
    Placeholder(usize),
}

/// One cell of the product grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardSlot<'a> {
    Product(&'a Product),
    /// Skeleton card shown while a fetch is outstanding.
    Placeholder(usize),
}

impl CardSlot<'_> {
    pub fn key(&self) -> CardKey {
        match self {
            CardSlot::Product(product) => CardKey::Product(product.id),
            CardSlot::Placeholder(index) => CardKey::Placeholder(*index),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, CardSlot::Placeholder(_))
    }
}

/// The main body of the gallery. Exactly one is shown at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryBody<'a> {
    /// The fetch failed; nothing else is shown.
    Error { message: &'a str },
    /// The query matched no products.
    NotFound { message: &'static str },
    /// No data yet and nothing in flight.
    Blank,
    Grid { slots: Vec<CardSlot<'a>> },
}

impl GalleryBody<'_> {
    pub fn placeholder_count(&self) -> usize {
        match self {
            GalleryBody::Grid { slots } => slots.iter().filter(|s| s.is_placeholder()).count(),
            _ => 0,
        }
    }

    pub fn slot_count(&self) -> usize {
        match self {
            GalleryBody::Grid { slots } => slots.len(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView<'a> {
    pub body: GalleryBody<'a>,
    /// Whether the loading indicator (the "load more" sentinel) is mounted.
    pub loader_mounted: bool,
}

/// Decide what the gallery shows for a snapshot.
///
/// First match wins: error, then not-found, then blank, then the grid. The
/// loader is mounted whenever more products exist than `limit`, whatever the
/// body is.
pub fn select_view<'a>(
    result: &'a FetchResult,
    limit: usize,
    lang: Locale,
    page_size: usize,
) -> GalleryView<'a> {
    let loader_mounted = result.total > limit;

    let body = if let Some(error) = &result.error {
        GalleryBody::Error {
            message: &error.message,
        }
    } else if !result.is_loading && result.items.as_ref().is_some_and(|items| items.is_empty()) {
        GalleryBody::NotFound {
            message: lang.not_found_message(),
        }
    } else if !result.is_loading && result.items.is_none() {
        GalleryBody::Blank
    } else {
        let mut slots: Vec<CardSlot<'a>> = result.items().iter().map(CardSlot::Product).collect();
        if result.is_loading {
            slots.extend((0..page_size).map(CardSlot::Placeholder));
        }
        GalleryBody::Grid { slots }
    };

    GalleryView {
        body,
        loader_mounted,
    }
}

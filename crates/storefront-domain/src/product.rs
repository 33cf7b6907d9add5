use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::locale::Locale;

pub type ProductId = Uuid;

/// Text stored once per locale. Persian falls back to English when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fa: None,
        }
    }

    pub fn with_fa(mut self, fa: impl Into<String>) -> Self {
        self.fa = Some(fa.into());
        self
    }

    pub fn get(&self, lang: Locale) -> &str {
        match lang {
            Locale::En => &self.en,
            Locale::Fa => self.fa.as_deref().unwrap_or(&self.en),
        }
    }
}

/// A product as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ProductId,
    pub name: LocalizedText,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: LocalizedText, price: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            image: None,
        }
    }

    pub fn localize(&self, lang: Locale) -> Product {
        Product {
            id: self.id,
            name: self.name.get(lang).to_string(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

/// A product localized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_prefers_requested_locale() {
        let entry = CatalogEntry::new(LocalizedText::new("Teapot").with_fa("قوری"), 1200);

        let en = entry.localize(Locale::En);
        assert_eq!(en.name, "Teapot");
        assert_eq!(en.id, entry.id);

        let fa = entry.localize(Locale::Fa);
        assert_eq!(fa.name, "قوری");
        assert_eq!(fa.price, 1200);
    }

    #[test]
    fn test_persian_falls_back_to_english() {
        let entry = CatalogEntry::new(LocalizedText::new("Kettle"), 900);
        assert_eq!(entry.localize(Locale::Fa).name, "Kettle");
    }
}

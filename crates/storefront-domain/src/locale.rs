use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use storefront_core::StorefrontError;

/// Locales the storefront ships strings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    /// Message shown when a query matches no products.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Locale::En => "Does't exist item",
            Locale::Fa => "گزینه ای وجود ندارد",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fa" => Ok(Locale::Fa),
            other => Err(StorefrontError::Validation(format!(
                "unsupported locale '{other}' (expected 'en' or 'fa')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!(" FA ".parse::<Locale>().unwrap(), Locale::Fa);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(Locale::En.not_found_message(), "Does't exist item");
        assert_eq!(Locale::Fa.not_found_message(), "گزینه ای وجود ندارد");
    }

    #[test]
    fn test_serde_tag() {
        assert_eq!(serde_json::to_string(&Locale::Fa).unwrap(), "\"fa\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }
}

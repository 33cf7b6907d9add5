use serde_json::json;
use storefront_domain::{CatalogEntry, LocalizedText};
use storefront_persistence::{CatalogStore, JsonCatalogStore};

use crate::cli::InitArgs;
use crate::output;

const ADJECTIVES: [(&str, &str); 5] = [
    ("Classic", "کلاسیک"),
    ("Compact", "جمع و جور"),
    ("Deluxe", "لوکس"),
    ("Everyday", "روزمره"),
    ("Travel", "سفری"),
];

const NOUNS: [(&str, &str); 6] = [
    ("Backpack", "کوله پشتی"),
    ("Lamp", "چراغ"),
    ("Mug", "ماگ"),
    ("Notebook", "دفترچه"),
    ("Headphones", "هدفون"),
    ("Watch", "ساعت"),
];

pub async fn handle(file_path: &str, args: InitArgs) -> anyhow::Result<()> {
    let store = JsonCatalogStore::new(file_path);
    if store.exists().await && !args.force {
        anyhow::bail!("{file_path} already exists (use --force to overwrite)");
    }

    let entries = demo_entries(args.count);
    store.save(&entries).await?;
    tracing::info!("Wrote {} demo products to {}", entries.len(), file_path);

    output::output_success(json!({
        "path": file_path,
        "count": entries.len(),
    }))
}

fn demo_entries(count: usize) -> Vec<CatalogEntry> {
    (0..count)
        .map(|i| {
            let (adj_en, adj_fa) = ADJECTIVES[i % ADJECTIVES.len()];
            let (noun_en, noun_fa) = NOUNS[(i / ADJECTIVES.len()) % NOUNS.len()];
            let number = i + 1;
            let name = LocalizedText::new(format!("{adj_en} {noun_en} {number}"))
                .with_fa(format!("{noun_fa} {adj_fa} {number}"));
            let price = 50_000 + (i as u64 * 37_500) % 2_000_000;
            CatalogEntry::new(name, price)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use storefront_domain::Locale;

    #[test]
    fn test_demo_entries_are_distinct() {
        let entries = demo_entries(55);
        assert_eq!(entries.len(), 55);

        let ids: HashSet<_> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 55);

        let names: HashSet<_> = entries.iter().map(|e| e.name.get(Locale::En)).collect();
        assert_eq!(names.len(), 55);
    }

    #[test]
    fn test_demo_entries_have_persian_names() {
        let entries = demo_entries(3);
        assert_eq!(entries[0].name.get(Locale::En), "Classic Backpack 1");
        assert_eq!(entries[0].name.get(Locale::Fa), "کوله پشتی کلاسیک 1");
    }
}

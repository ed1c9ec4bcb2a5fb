use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Injectable mapping from provider ticker symbol to display label.
///
/// The default set mirrors the indices the application has always tracked.
/// Insertion order is preserved so legends render stably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexCatalog {
    entries: IndexMap<String, String>,
}

impl Default for IndexCatalog {
    fn default() -> Self {
        let mut entries = IndexMap::new();
        for (symbol, label) in [
            ("^GSPC", "S&P 500"),
            ("^STOXX50E", "Euro Stoxx 50"),
            ("^FTSE", "FTSE 100"),
            ("^N225", "Nikkei 225"),
            ("^HSI", "Hang Seng"),
        ] {
            entries.insert(symbol.to_owned(), label.to_owned());
        }
        Self { entries }
    }
}

impl IndexCatalog {
    #[must_use]
    pub fn new(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, symbol: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(symbol.into(), label.into());
    }

    #[must_use]
    pub fn label_for(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(String::as_str)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_carries_the_tracked_indices() {
        let catalog = IndexCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.label_for("^GSPC"), Some("S&P 500"));
        assert_eq!(catalog.label_for("^STOXX50E"), Some("Euro Stoxx 50"));
        assert_eq!(catalog.label_for("^FTSE"), Some("FTSE 100"));
        assert_eq!(catalog.label_for("^N225"), Some("Nikkei 225"));
        assert_eq!(catalog.label_for("^HSI"), Some("Hang Seng"));
        assert_eq!(catalog.label_for("^GDAXI"), None);
    }

    #[test]
    fn symbols_keep_insertion_order() {
        let catalog = IndexCatalog::default();
        let symbols: Vec<&str> = catalog.symbols().collect();
        assert_eq!(
            symbols,
            ["^GSPC", "^STOXX50E", "^FTSE", "^N225", "^HSI"]
        );
    }

    #[test]
    fn custom_catalog_overrides_the_defaults() {
        let mut catalog = IndexCatalog::new(IndexMap::new());
        assert!(catalog.is_empty());

        catalog.insert("^GDAXI", "DAX");
        catalog.insert("^GSPC", "S&P 500 (total return)");
        assert_eq!(catalog.label_for("^GDAXI"), Some("DAX"));
        assert_eq!(catalog.label_for("^GSPC"), Some("S&P 500 (total return)"));
        assert_eq!(catalog.symbols().collect::<Vec<_>>(), ["^GDAXI", "^GSPC"]);
    }
}

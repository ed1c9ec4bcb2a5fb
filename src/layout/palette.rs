use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category → RGB hex color mapping for label bubbles and markers.
///
/// Lookup is whitespace- and case-insensitive; unknown categories fall back
/// to a warm neutral. The mapping is injectable like the index catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPalette {
    colors: IndexMap<String, String>,
    fallback: String,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        let mut colors = IndexMap::new();
        for (category, color) in [
            ("famiglia", "#fa9f42"),
            ("finanze", "#2b4162"),
            ("sogni", "#0b6e4f"),
            ("carriera", "#814342"),
            ("istruzione", "#e0e0e2"),
            ("salute", "#f71735"),
        ] {
            colors.insert(category.to_owned(), color.to_owned());
        }
        Self {
            colors,
            fallback: "#C7884A".to_owned(),
        }
    }
}

impl CategoryPalette {
    #[must_use]
    pub fn new(colors: IndexMap<String, String>, fallback: impl Into<String>) -> Self {
        let colors = colors
            .into_iter()
            .map(|(category, color)| (canonical(&category), color))
            .collect();
        Self {
            colors,
            fallback: fallback.into(),
        }
    }

    #[must_use]
    pub fn color_for(&self, category: &str) -> &str {
        self.colors
            .get(&canonical(category))
            .unwrap_or(&self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

fn canonical(category: &str) -> String {
    category.trim().to_lowercase()
}

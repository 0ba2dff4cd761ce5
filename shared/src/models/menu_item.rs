//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuCategory {
    /// Individual fast-food items
    Quick,
    /// Composed daily set menus
    SetMenu,
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuCategory::Quick => write!(f, "QUICK"),
            MenuCategory::SetMenu => write!(f, "SET_MENU"),
        }
    }
}

/// Menu item entity
///
/// Immutable once the catalog is built. Prices are unit prices in the store
/// currency, two decimal places.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// Image reference (relative asset path)
    pub image: String,
    pub category: MenuCategory,
}

impl MenuItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        category: MenuCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: image.into(),
            category,
        }
    }
}

/// Category filter for the menu display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuFilter {
    #[default]
    All,
    Quick,
    SetMenu,
}

impl MenuFilter {
    /// Whether an item of the given category passes this filter
    pub fn matches(&self, category: MenuCategory) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Quick => category == MenuCategory::Quick,
            MenuFilter::SetMenu => category == MenuCategory::SetMenu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        assert!(MenuFilter::All.matches(MenuCategory::Quick));
        assert!(MenuFilter::All.matches(MenuCategory::SetMenu));
        assert!(MenuFilter::Quick.matches(MenuCategory::Quick));
        assert!(!MenuFilter::Quick.matches(MenuCategory::SetMenu));
        assert!(MenuFilter::SetMenu.matches(MenuCategory::SetMenu));
        assert!(!MenuFilter::SetMenu.matches(MenuCategory::Quick));
    }

    #[test]
    fn test_category_wire_casing() {
        let json = serde_json::to_string(&MenuCategory::SetMenu).unwrap();
        assert_eq!(json, "\"SET_MENU\"");
        let parsed: MenuCategory = serde_json::from_str("\"QUICK\"").unwrap();
        assert_eq!(parsed, MenuCategory::Quick);
    }
}

//! Menu catalog
//!
//! Static list of purchasable items, built once at startup and never
//! mutated afterwards. Lookup by ID, listing by category filter.

use shared::models::{MenuCategory, MenuFilter, MenuItem};

/// Menu catalog
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from the given items
    ///
    /// Later duplicates of an ID are dropped; the first definition wins.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                if seen.insert(item.id) {
                    true
                } else {
                    tracing::warn!(item_id = item.id, "Duplicate menu item ID dropped");
                    false
                }
            })
            .collect();
        Self { items }
    }

    /// The standard Menu Fast vendor menu
    pub fn default_menu() -> Self {
        Self::with_items(vec![
            MenuItem::new(1, "Classic Burger", 8.99, "img/classic-burger.jpg", MenuCategory::Quick),
            MenuItem::new(2, "Fries", 3.50, "img/fries.jpg", MenuCategory::Quick),
            MenuItem::new(3, "Soda", 1.99, "img/soda.jpg", MenuCategory::Quick),
            MenuItem::new(4, "Daily Set: Chicken", 12.99, "img/chicken-set.jpg", MenuCategory::SetMenu),
        ])
    }

    /// Look up an item by ID
    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items, in menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Items passing the given category filter, in menu order
    pub fn filtered(&self, filter: MenuFilter) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item.category))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::default_menu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_lookup() {
        let catalog = MenuCatalog::default_menu();
        assert_eq!(catalog.len(), 4);

        let burger = catalog.get(1).unwrap();
        assert_eq!(burger.name, "Classic Burger");
        assert_eq!(burger.price, 8.99);

        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_category_filter() {
        let catalog = MenuCatalog::default_menu();

        assert_eq!(catalog.filtered(MenuFilter::All).len(), 4);
        assert_eq!(catalog.filtered(MenuFilter::Quick).len(), 3);

        let sets = catalog.filtered(MenuFilter::SetMenu);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name, "Daily Set: Chicken");
    }

    #[test]
    fn test_duplicate_ids_dropped() {
        let catalog = MenuCatalog::with_items(vec![
            MenuItem::new(1, "First", 1.0, "a.jpg", MenuCategory::Quick),
            MenuItem::new(1, "Second", 2.0, "b.jpg", MenuCategory::Quick),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().name, "First");
    }
}

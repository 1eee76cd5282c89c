use std::collections::HashMap;

use crate::models::{Category, MenuItem};

/// In-memory menu, kept in file order.
pub struct Catalog {
    items: Vec<MenuItem>,
    /// Lowercase name to position in `items`; last occurrence wins.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from a list of items.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.key(), i))
            .collect();
        Self { items, index }
    }

    /// Get an item by name (case-insensitive).
    pub fn get_item(&self, name: &str) -> Option<&MenuItem> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.items[i])
    }

    /// Items of one category, in file order.
    pub fn by_category(&self, category: Category) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Starters, mains, sides and desserts, each in file order.
    pub fn split_into_categories(
        &self,
    ) -> (Vec<&MenuItem>, Vec<&MenuItem>, Vec<&MenuItem>, Vec<&MenuItem>) {
        (
            self.by_category(Category::Starter),
            self.by_category(Category::Main),
            self.by_category(Category::Side),
            self.by_category(Category::Dessert),
        )
    }

    /// Items failing [`MenuItem::is_valid`].
    pub fn invalid_items(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| !item.is_valid()).collect()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Count of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//! Menu catalog
//!
//! Owns the category/item tree. Mutations are field-level merges and
//! structural add/remove; a missing identifier is a silent no-op, matching
//! how the screens treat stale ids. The read side provides the derived
//! views the menu and home screens render from.

pub mod seed;

use shared::models::{MenuCategory, MenuItem, MenuItemUpdate};

/// Veg filter applied to the menu view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VegFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

/// Filters the menu screen applies to the catalog
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    /// Restrict to a single category id (`None` = all)
    pub category: Option<String>,
    /// Case-insensitive substring match over item name and description
    pub query: Option<String>,
    pub veg: VegFilter,
}

/// Catalog state container
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Catalog seeded with the hardcoded menu
    pub fn seeded() -> Self {
        Self {
            categories: seed::default_menu(),
        }
    }

    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// Full menu in display order
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// First item with this id across all categories
    pub fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.id == item_id)
    }

    /// Merge `fields` into the matching item; silent no-op on a miss
    pub fn update_item(&mut self, category_id: &str, item_id: &str, fields: MenuItemUpdate) {
        let Some(item) = self.item_mut(category_id, item_id) else {
            return;
        };

        if let Some(name) = fields.name {
            item.name = name;
        }
        if let Some(description) = fields.description {
            item.description = description;
        }
        if let Some(price) = fields.price {
            item.price = price;
        }
        if let Some(half_price) = fields.half_price {
            item.half_price = Some(half_price);
        }
        if let Some(image) = fields.image {
            item.image = image;
        }
        if let Some(cooking_time) = fields.cooking_time {
            item.cooking_time = cooking_time;
        }
        if let Some(spicy_level) = fields.spicy_level {
            item.spicy_level = spicy_level;
        }
        if let Some(is_veg) = fields.is_veg {
            item.is_veg = is_veg;
        }
        if let Some(available) = fields.available {
            item.available = available;
        }
    }

    /// Append an item to a category; silent no-op when the category is missing
    ///
    /// The caller supplies the id; uniqueness is not checked here.
    pub fn add_item(&mut self, category_id: &str, item: MenuItem) {
        if let Some(category) = self.category_mut(category_id) {
            category.items.push(item);
        }
    }

    /// Remove an item from a category; silent no-op on a miss
    pub fn remove_item(&mut self, category_id: &str, item_id: &str) {
        if let Some(category) = self.category_mut(category_id) {
            category.items.retain(|i| i.id != item_id);
        }
    }

    /// Menu view after applying the screen filters
    ///
    /// Categories left without items are dropped from the result.
    pub fn filtered(&self, filter: &MenuFilter) -> Vec<MenuCategory> {
        let query = filter.query.as_deref().map(str::to_lowercase);

        self.categories
            .iter()
            .filter(|c| filter.category.as_deref().is_none_or(|id| c.id == id))
            .map(|c| {
                let items: Vec<MenuItem> = c
                    .items
                    .iter()
                    .filter(|item| {
                        let matches_query = query.as_deref().is_none_or(|q| {
                            item.name.to_lowercase().contains(q)
                                || item.description.to_lowercase().contains(q)
                        });
                        let matches_veg = match filter.veg {
                            VegFilter::All => true,
                            VegFilter::Veg => item.is_veg,
                            VegFilter::NonVeg => !item.is_veg,
                        };
                        matches_query && matches_veg
                    })
                    .cloned()
                    .collect();

                MenuCategory {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    items,
                }
            })
            .filter(|c| !c.items.is_empty())
            .collect()
    }

    /// Home-screen strip: up to `per_category` available items per category
    pub fn featured(&self, per_category: usize) -> Vec<MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| {
                c.items
                    .iter()
                    .filter(|i| i.available)
                    .take(per_category)
                    .cloned()
            })
            .collect()
    }

    fn category_mut(&mut self, category_id: &str) -> Option<&mut MenuCategory> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    fn item_mut(&mut self, category_id: &str, item_id: &str) -> Option<&mut MenuItem> {
        self.category_mut(category_id)?
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.categories().len(), 4);

        let item_count: usize = catalog.categories().iter().map(|c| c.items.len()).sum();
        assert_eq!(item_count, 26);

        // Every item starts available
        assert!(catalog
            .categories()
            .iter()
            .flat_map(|c| c.items.iter())
            .all(|i| i.available));
    }

    #[test]
    fn test_update_item_merges_only_given_fields() {
        let mut catalog = Catalog::seeded();
        let before = catalog.find_item("3").unwrap().clone();

        catalog.update_item(
            "1",
            "3",
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
        );

        let after = catalog.find_item("3").unwrap();
        assert!(!after.available);
        assert_eq!(after.price, before.price);
        assert_eq!(after.description, before.description);
    }

    #[test]
    fn test_update_item_missing_id_leaves_catalog_unchanged() {
        let mut catalog = Catalog::seeded();
        let before = catalog.clone();

        catalog.update_item(
            "1",
            "999",
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
        );
        catalog.update_item(
            "999",
            "3",
            MenuItemUpdate {
                price: Some(1.0),
                ..Default::default()
            },
        );

        assert_eq!(catalog, before);
    }

    #[test]
    fn test_update_item_edits_prices() {
        let mut catalog = Catalog::seeded();

        catalog.update_item(
            "1",
            "1",
            MenuItemUpdate {
                price: Some(240.0),
                half_price: Some(130.0),
                ..Default::default()
            },
        );

        let item = catalog.find_item("1").unwrap();
        assert_eq!(item.price, 240.0);
        assert_eq!(item.half_price, Some(130.0));
    }

    #[test]
    fn test_add_item_appends_to_category() {
        let mut catalog = Catalog::seeded();
        let lassi = MenuItem {
            id: "27".to_string(),
            name: "Sweet Lassi".to_string(),
            description: "Chilled yogurt drink".to_string(),
            price: 60.0,
            half_price: None,
            image: "https://example.com/lassi.jpg".to_string(),
            cooking_time: "5 min".to_string(),
            spicy_level: 0,
            is_veg: true,
            available: true,
        };

        catalog.add_item("2", lassi.clone());
        assert_eq!(catalog.categories()[1].items.last(), Some(&lassi));

        // Missing category is a silent no-op
        let before = catalog.clone();
        catalog.add_item("999", lassi);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_remove_item() {
        let mut catalog = Catalog::seeded();
        catalog.remove_item("1", "3");
        assert!(catalog.find_item("3").is_none());

        let before = catalog.clone();
        catalog.remove_item("1", "999");
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_filtered_by_query_matches_name_and_description() {
        let catalog = Catalog::seeded();

        let view = catalog.filtered(&MenuFilter {
            query: Some("paneer".to_string()),
            ..Default::default()
        });

        assert!(!view.is_empty());
        for category in &view {
            assert!(!category.items.is_empty());
            for item in &category.items {
                let haystack =
                    format!("{} {}", item.name.to_lowercase(), item.description.to_lowercase());
                assert!(haystack.contains("paneer"));
            }
        }
    }

    #[test]
    fn test_filtered_by_category() {
        let catalog = Catalog::seeded();

        let view = catalog.filtered(&MenuFilter {
            category: Some("3".to_string()),
            ..Default::default()
        });

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Roti");
    }

    #[test]
    fn test_filtered_veg_only() {
        let catalog = Catalog::seeded();

        let view = catalog.filtered(&MenuFilter {
            veg: VegFilter::Veg,
            ..Default::default()
        });
        assert!(view.iter().flat_map(|c| c.items.iter()).all(|i| i.is_veg));

        let view = catalog.filtered(&MenuFilter {
            veg: VegFilter::NonVeg,
            ..Default::default()
        });
        assert!(view.iter().flat_map(|c| c.items.iter()).all(|i| !i.is_veg));
        // Roti and Paratha are all-veg categories, so they drop out entirely
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_filtered_drops_empty_categories() {
        let catalog = Catalog::seeded();

        let view = catalog.filtered(&MenuFilter {
            query: Some("biryani".to_string()),
            ..Default::default()
        });

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");
    }

    #[test]
    fn test_featured_takes_available_items_per_category() {
        let mut catalog = Catalog::seeded();
        assert_eq!(catalog.featured(2).len(), 8);

        // An unavailable item gives way to the next one in its category
        catalog.update_item(
            "1",
            "1",
            MenuItemUpdate {
                available: Some(false),
                ..Default::default()
            },
        );
        let featured = catalog.featured(2);
        assert_eq!(featured.len(), 8);
        assert!(featured.iter().all(|i| i.available));
        assert!(!featured.iter().any(|i| i.id == "1"));
    }
}

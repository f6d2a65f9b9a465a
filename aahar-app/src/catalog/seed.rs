//! Hardcoded menu catalog
//!
//! The app ships with this menu; admin edits apply on top of it in memory
//! and last for the session.

use shared::models::{MenuCategory, MenuItem};

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    half_price: Option<f64>,
    image: &str,
    cooking_time: &str,
    spicy_level: i32,
    is_veg: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        half_price,
        image: image.to_string(),
        cooking_time: cooking_time.to_string(),
        spicy_level,
        is_veg,
        available: true,
    }
}

fn category(id: &str, name: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

/// The default menu: 4 categories, 26 items
pub fn default_menu() -> Vec<MenuCategory> {
    vec![
        category(
            "1",
            "Biriyani & Rice",
            vec![
                item(
                    "1",
                    "Chicken Biryani",
                    "Fragrant basmati rice cooked with tender chicken and aromatic spices",
                    220.0,
                    Some(120.0),
                    "https://images.unsplash.com/photo-1563379091339-03246963d96f?ixlib=rb-4.0.3&w=400",
                    "25 min",
                    2,
                    false,
                ),
                item(
                    "2",
                    "Hyderabad Biryani",
                    "Authentic Hyderabadi dum biryani with rich flavors and tender meat",
                    250.0,
                    Some(130.0),
                    "https://images.unsplash.com/photo-1599043513900-ed6fe01d3833?ixlib=rb-4.0.3&w=400",
                    "30 min",
                    3,
                    false,
                ),
                item(
                    "3",
                    "Mutton Biryani",
                    "Succulent mutton pieces cooked with fragrant rice and spices",
                    280.0,
                    None,
                    "https://images.unsplash.com/photo-1601050690597-df0568f70950?ixlib=rb-4.0.3&w=400",
                    "35 min",
                    2,
                    false,
                ),
                item(
                    "4",
                    "Paneer Biryani",
                    "Flavorful biryani with soft paneer cubes and aromatic rice",
                    180.0,
                    None,
                    "https://images.unsplash.com/photo-1589302168068-964664d93dc0?ixlib=rb-4.0.3&w=400",
                    "20 min",
                    1,
                    true,
                ),
                item(
                    "5",
                    "Egg Biryani",
                    "Delicious biryani with boiled eggs and special spices",
                    160.0,
                    None,
                    "https://images.unsplash.com/photo-1598214886806-c87ed84e5a1b?ixlib=rb-4.0.3&w=400",
                    "20 min",
                    2,
                    false,
                ),
            ],
        ),
        category(
            "2",
            "Rice",
            vec![
                item(
                    "6",
                    "Plain Rice",
                    "Steamed basmati rice",
                    90.0,
                    None,
                    "https://images.unsplash.com/photo-1536304993881-ff6e9eefa2a6?ixlib=rb-4.0.3&w=400",
                    "15 min",
                    0,
                    true,
                ),
                item(
                    "7",
                    "Jeera Rice",
                    "Basmati rice tempered with cumin seeds",
                    120.0,
                    None,
                    "https://images.unsplash.com/photo-1512058564366-18510be2db19?ixlib=rb-4.0.3&w=400",
                    "15 min",
                    0,
                    true,
                ),
                item(
                    "8",
                    "Veg Fried Rice",
                    "Stir-fried rice with fresh vegetables",
                    130.0,
                    None,
                    "https://images.unsplash.com/photo-1603133872878-684f270fb8f5?ixlib=rb-4.0.3&w=400",
                    "20 min",
                    1,
                    true,
                ),
                item(
                    "9",
                    "Egg Fried Rice",
                    "Fried rice with scrambled eggs and vegetables",
                    160.0,
                    None,
                    "https://images.unsplash.com/photo-1641865750370-645fb8c6e5b4?ixlib=rb-4.0.3&w=400",
                    "20 min",
                    1,
                    false,
                ),
                item(
                    "10",
                    "Chicken Fried Rice",
                    "Flavorful fried rice with tender chicken pieces",
                    180.0,
                    None,
                    "https://images.unsplash.com/photo-1631452180519-c014fe946bc7?ixlib=rb-4.0.3&w=400",
                    "25 min",
                    2,
                    false,
                ),
                item(
                    "11",
                    "Mix Fried Rice",
                    "Special fried rice with chicken, eggs, and vegetables",
                    220.0,
                    None,
                    "https://images.unsplash.com/photo-1603133872642-9dbe4d25887e?ixlib=rb-4.0.3&w=400",
                    "25 min",
                    2,
                    false,
                ),
            ],
        ),
        category(
            "3",
            "Roti",
            vec![
                item(
                    "12",
                    "Plain Roti",
                    "Traditional Indian whole wheat bread",
                    10.0,
                    None,
                    "https://images.unsplash.com/photo-1601050690597-df0568f70950?ixlib=rb-4.0.3&w=400",
                    "5 min",
                    0,
                    true,
                ),
                item(
                    "13",
                    "Plain Butter Roti",
                    "Soft roti with fresh butter",
                    15.0,
                    None,
                    "https://images.unsplash.com/photo-1546833999-b9f581a1996d?ixlib=rb-4.0.3&w=400",
                    "5 min",
                    0,
                    true,
                ),
                item(
                    "14",
                    "Tandoori Roti",
                    "Traditional Indian bread baked in clay tandoor",
                    15.0,
                    None,
                    "https://images.unsplash.com/photo-1572802419224-296b0aeee0d9?ixlib=rb-4.0.3&w=400",
                    "7 min",
                    0,
                    true,
                ),
                item(
                    "15",
                    "Tandoori Butter Roti",
                    "Tandoori roti with fresh butter",
                    20.0,
                    None,
                    "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?ixlib=rb-4.0.3&w=400",
                    "7 min",
                    0,
                    true,
                ),
                item(
                    "16",
                    "Tandoori Butter Naan",
                    "Leavened bread with butter from tandoor",
                    60.0,
                    None,
                    "https://images.unsplash.com/photo-1565299507177-b0ac66763828?ixlib=rb-4.0.3&w=400",
                    "10 min",
                    0,
                    true,
                ),
                item(
                    "17",
                    "Plain Naan",
                    "Classic leavened white bread",
                    50.0,
                    None,
                    "https://images.unsplash.com/photo-1555949969-aa4bd76539d0?ixlib=rb-4.0.3&w=400",
                    "10 min",
                    0,
                    true,
                ),
                item(
                    "18",
                    "Garlic Naan",
                    "Soft naan bread topped with fresh garlic and herbs",
                    70.0,
                    None,
                    "https://images.unsplash.com/photo-1565299588453-b8ec840b7c7e?ixlib=rb-4.0.3&w=400",
                    "10 min",
                    0,
                    true,
                ),
                item(
                    "19",
                    "Paneer Kulcha Naan",
                    "Stuffed bread with spiced paneer filling",
                    100.0,
                    None,
                    "https://images.unsplash.com/photo-1555949969-aa4bd76539d0?ixlib=rb-4.0.3&w=400",
                    "12 min",
                    1,
                    true,
                ),
                item(
                    "20",
                    "Masala Kulcha",
                    "Spiced stuffed bread with potato and herbs",
                    120.0,
                    None,
                    "https://images.unsplash.com/photo-1633945274417-ab438e34b372?ixlib=rb-4.0.3&w=400",
                    "12 min",
                    1,
                    true,
                ),
            ],
        ),
        category(
            "4",
            "Paratha",
            vec![
                item(
                    "21",
                    "Aloo Paratha",
                    "Whole wheat bread stuffed with spiced potatoes",
                    60.0,
                    None,
                    "https://images.unsplash.com/photo-1631452180519-c014fe946bc7?ixlib=rb-4.0.3&w=400",
                    "15 min",
                    1,
                    true,
                ),
                item(
                    "22",
                    "Onion Paratha",
                    "Flaky paratha stuffed with seasoned onions",
                    70.0,
                    None,
                    "https://images.unsplash.com/photo-1633945274417-ab438e34b372?ixlib=rb-4.0.3&w=400",
                    "15 min",
                    1,
                    true,
                ),
                item(
                    "23",
                    "Paneer Paratha",
                    "Paratha filled with spiced cottage cheese",
                    80.0,
                    None,
                    "https://images.unsplash.com/photo-1555949969-aa4bd76539d0?ixlib=rb-4.0.3&w=400",
                    "15 min",
                    1,
                    true,
                ),
                item(
                    "24",
                    "Paneer Kulcha",
                    "Soft kulcha stuffed with paneer filling",
                    120.0,
                    None,
                    "https://images.unsplash.com/photo-1555949969-aa4bd76539d0?ixlib=rb-4.0.3&w=400",
                    "12 min",
                    1,
                    true,
                ),
                item(
                    "25",
                    "Veg Kulcha",
                    "Kulcha stuffed with mixed vegetables",
                    90.0,
                    None,
                    "https://images.unsplash.com/photo-1633945274417-ab438e34b372?ixlib=rb-4.0.3&w=400",
                    "12 min",
                    1,
                    true,
                ),
                item(
                    "26",
                    "Masala Kulcha",
                    "Spiced kulcha with special masala filling",
                    120.0,
                    None,
                    "https://images.unsplash.com/photo-1633945274417-ab438e34b372?ixlib=rb-4.0.3&w=400",
                    "12 min",
                    2,
                    true,
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_ids_are_unique_across_catalog() {
        let menu = default_menu();
        let ids: Vec<&str> = menu
            .iter()
            .flat_map(|c| c.items.iter())
            .map(|i| i.id.as_str())
            .collect();

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_only_biryanis_offer_half_portions() {
        let menu = default_menu();
        let with_half: Vec<&str> = menu
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|i| i.half_price.is_some())
            .map(|i| i.id.as_str())
            .collect();

        assert_eq!(with_half, vec!["1", "2"]);
    }

    #[test]
    fn test_half_prices_are_below_full_prices() {
        // Not enforced anywhere, but the seed data satisfies it
        for item in default_menu().iter().flat_map(|c| c.items.iter()) {
            if let Some(half) = item.half_price {
                assert!(half < item.price, "{} half price >= price", item.id);
            }
        }
    }
}

//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Full-portion price
    pub price: f64,
    /// Half-portion price (only for items offering a half portion)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_price: Option<f64>,
    /// Opaque image URI, resolved by the image-loading service
    pub image: String,
    /// Preparation-time label (free text, e.g. "25 min")
    pub cooking_time: String,
    /// 0 = mild .. 3 = very spicy
    pub spicy_level: i32,
    pub is_veg: bool,
    pub available: bool,
}

/// Update menu item payload (field-level merge, `None` = unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub half_price: Option<f64>,
    pub image: Option<String>,
    pub cooking_time: Option<String>,
    pub spicy_level: Option<i32>,
    pub is_veg: Option<bool>,
    pub available: Option<bool>,
}

//! Shared types for basket lines

use serde::{Deserialize, Serialize};

use crate::models::MenuItem;

/// Portion selector: which price applies to a basket line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Portion {
    #[default]
    Full,
    Half,
}

impl Portion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Portion::Full => "full",
            Portion::Half => "half",
        }
    }
}

impl std::fmt::Display for Portion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Basket line: snapshot of a menu item at add time plus portion and quantity
///
/// Uniqueness key within a basket is `(item_id, portion)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketLine {
    /// Id of the menu item this line was snapshotted from
    pub item_id: String,
    pub name: String,
    /// Full-portion price at add time
    pub price: f64,
    /// Half-portion price at add time, when the item offers one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub half_price: Option<f64>,
    pub image: String,
    pub portion: Portion,
    pub quantity: i32,
}

impl BasketLine {
    /// Snapshot `item` into a new basket line
    pub fn snapshot(item: &MenuItem, portion: Portion, quantity: i32) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            half_price: item.half_price,
            image: item.image.clone(),
            portion,
            quantity,
        }
    }

    /// Price that applies for this line's portion
    ///
    /// Half falls back to the full price when the item has no half portion.
    pub fn effective_price(&self) -> f64 {
        match (self.portion, self.half_price) {
            (Portion::Half, Some(half)) => half,
            _ => self.price,
        }
    }

    pub fn matches(&self, item_id: &str, portion: Portion) -> bool {
        self.item_id == item_id && self.portion == portion
    }
}

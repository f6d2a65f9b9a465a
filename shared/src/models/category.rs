//! Menu Category Model

use serde::{Deserialize, Serialize};

use super::menu_item::MenuItem;

/// Menu category entity
///
/// Items keep their insertion order; the sequence is the display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

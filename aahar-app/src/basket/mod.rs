//! Order basket
//!
//! Owns the selected (item, portion, quantity) lines. Lines are snapshots
//! taken at add time; later catalog price edits do not reprice them. The
//! total is a pure read recomputed from the current lines, never cached.

pub mod money;

use rust_decimal::Decimal;
use shared::basket::{BasketLine, Portion};
use shared::models::MenuItem;

/// Basket state container
#[derive(Debug, Clone, Default)]
pub struct Basket {
    lines: Vec<BasketLine>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lines, in insertion order
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct (item, portion) lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add `quantity` of an item
    ///
    /// Folds into the existing line when the same (item, portion) pair is
    /// already present; otherwise snapshots the item into a new line.
    /// Quantity is not validated here; callers pass >= 1 today.
    pub fn add(&mut self, item: &MenuItem, portion: Portion, quantity: i32) {
        if let Some(idx) = self.position(&item.id, portion) {
            self.lines[idx].quantity += quantity;
        } else {
            self.lines.push(BasketLine::snapshot(item, portion, quantity));
        }
    }

    /// Set the exact quantity of a line
    ///
    /// A quantity of zero or below removes the line. No-op when nothing
    /// matches.
    pub fn set_quantity(&mut self, item_id: &str, portion: Portion, quantity: i32) {
        if quantity <= 0 {
            self.remove(item_id, portion);
            return;
        }
        if let Some(idx) = self.position(item_id, portion) {
            self.lines[idx].quantity = quantity;
        }
    }

    /// Remove a line; silent no-op when absent
    pub fn remove(&mut self, item_id: &str, portion: Portion) {
        self.lines.retain(|l| !l.matches(item_id, portion));
    }

    /// Empty the basket unconditionally
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total price of the basket
    ///
    /// Recomputed from the current lines on every call. Display rounding is
    /// the caller's concern; see [`money::to_f64`].
    pub fn total(&self) -> Decimal {
        money::basket_total(&self.lines)
    }

    pub fn find(&self, item_id: &str, portion: Portion) -> Option<&BasketLine> {
        self.lines.iter().find(|l| l.matches(item_id, portion))
    }

    fn position(&self, item_id: &str, portion: Portion) -> Option<usize> {
        self.lines.iter().position(|l| l.matches(item_id, portion))
    }
}

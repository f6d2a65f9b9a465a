//! Checkout flow
//!
//! Validates the delivery details against the current basket and produces
//! an order receipt. There is no dispatch to a kitchen system; the receipt
//! is what the confirmation dialog renders.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::basket::BasketLine;
use thiserror::Error;
use uuid::Uuid;

use crate::basket::{Basket, money};

/// Fixed estimate shown on the confirmation dialog
pub const ESTIMATED_DELIVERY: &str = "35-45 minutes";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Please fill in all required delivery details")]
    IncompleteDetails,

    #[error("Please add items to your cart before checkout")]
    EmptyBasket,
}

/// Delivery details collected on the cart screen
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Optional note for the rider
    #[serde(default)]
    pub instructions: String,
}

impl DeliveryDetails {
    /// Name, address and phone are required
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.name.is_empty() || self.address.is_empty() || self.phone.is_empty() {
            return Err(CheckoutError::IncompleteDetails);
        }
        Ok(())
    }
}

/// Receipt for a placed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    /// Lines as they were at checkout
    pub lines: Vec<BasketLine>,
    /// Order total, rounded to two decimal places
    pub total: f64,
    pub delivery: DeliveryDetails,
    /// ISO-8601 timestamp
    pub placed_at: String,
    pub estimated_delivery: String,
}

/// Place the order and empty the basket
///
/// Details are checked before the basket, the same order the cart screen
/// prompts in.
pub fn place_order(
    basket: &mut Basket,
    delivery: DeliveryDetails,
) -> Result<OrderReceipt, CheckoutError> {
    delivery.validate()?;

    if basket.is_empty() {
        return Err(CheckoutError::EmptyBasket);
    }

    let total = money::to_f64(basket.total());
    let lines = basket.lines().to_vec();
    basket.clear();

    let receipt = OrderReceipt {
        order_id: Uuid::new_v4().to_string(),
        lines,
        total,
        delivery,
        placed_at: Utc::now().to_rfc3339(),
        estimated_delivery: ESTIMATED_DELIVERY.to_string(),
    };

    tracing::info!(order_id = %receipt.order_id, total = receipt.total, "Order placed");

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::basket::Portion;
    use shared::models::MenuItem;

    fn details() -> DeliveryDetails {
        DeliveryDetails {
            name: "Asha".to_string(),
            address: "12 MG Road".to_string(),
            phone: "9999999999".to_string(),
            instructions: String::new(),
        }
    }

    fn biryani() -> MenuItem {
        MenuItem {
            id: "1".to_string(),
            name: "Chicken Biryani".to_string(),
            description: "Fragrant basmati rice".to_string(),
            price: 220.0,
            half_price: Some(120.0),
            image: String::new(),
            cooking_time: "25 min".to_string(),
            spicy_level: 2,
            is_veg: false,
            available: true,
        }
    }

    #[test]
    fn test_missing_required_details_rejected() {
        let mut basket = Basket::new();
        basket.add(&biryani(), Portion::Full, 1);

        for missing in ["name", "address", "phone"] {
            let mut d = details();
            match missing {
                "name" => d.name.clear(),
                "address" => d.address.clear(),
                _ => d.phone.clear(),
            }
            assert_eq!(
                place_order(&mut basket, d).unwrap_err(),
                CheckoutError::IncompleteDetails
            );
        }

        // Basket is untouched by rejected checkouts
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_instructions_are_optional() {
        let mut basket = Basket::new();
        basket.add(&biryani(), Portion::Full, 1);

        assert!(place_order(&mut basket, details()).is_ok());
    }

    #[test]
    fn test_empty_basket_rejected() {
        let mut basket = Basket::new();
        assert_eq!(
            place_order(&mut basket, details()).unwrap_err(),
            CheckoutError::EmptyBasket
        );
    }

    #[test]
    fn test_details_checked_before_basket() {
        let mut basket = Basket::new();
        let err = place_order(&mut basket, DeliveryDetails::default()).unwrap_err();
        assert_eq!(err, CheckoutError::IncompleteDetails);
    }

    #[test]
    fn test_successful_order_drains_basket() {
        let mut basket = Basket::new();
        basket.add(&biryani(), Portion::Full, 1);
        basket.add(&biryani(), Portion::Half, 2);

        let receipt = place_order(&mut basket, details()).unwrap();

        assert!(basket.is_empty());
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.total, 460.0);
        assert_eq!(receipt.estimated_delivery, ESTIMATED_DELIVERY);
        assert!(!receipt.order_id.is_empty());
    }
}

//! Basket wire types
//!
//! The basket copies an item's display fields at add time, so later catalog
//! edits never reprice lines already in the cart.

pub mod types;

// Re-exports
pub use types::*;

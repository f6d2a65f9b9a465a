//! Shared types for the AAHAR ordering app
//!
//! Data models and basket wire types shared between the application core
//! and the screen layer.

pub mod basket;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

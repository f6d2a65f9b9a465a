//! Application root state
//!
//! The three containers are owned here and handed to the screen layer by
//! reference. No process-wide globals, so each container stays testable on
//! its own.

use std::sync::Arc;

use crate::basket::Basket;
use crate::catalog::Catalog;
use crate::checkout::{self, CheckoutError, DeliveryDetails, OrderReceipt};
use crate::core::config::AppConfig;
use crate::session::SessionManager;
use crate::storage::{JsonFileStore, KvStore};

/// Root state object supplied to the screen tree
pub struct App {
    pub catalog: Catalog,
    pub basket: Basket,
    pub session: SessionManager,
}

impl App {
    /// App over the given store, with the seeded catalog and an empty basket
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            catalog: Catalog::seeded(),
            basket: Basket::new(),
            session: SessionManager::new(store),
        }
    }

    /// App with file-backed storage under the configured data directory
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(JsonFileStore::new(config.data_dir.clone())))
    }

    /// One-time startup work: restore any persisted identity
    ///
    /// Gated screens stay unreachable while `session.is_loading()`.
    pub async fn start(&mut self) {
        self.session.restore().await;
    }

    /// Check out the current basket
    pub fn checkout(&mut self, delivery: DeliveryDetails) -> Result<OrderReceipt, CheckoutError> {
        checkout::place_order(&mut self.basket, delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_fresh_app_starts_logged_out_with_seeded_menu() {
        let mut app = App::new(Arc::new(MemoryStore::new()));
        app.start().await;

        assert!(!app.session.is_loading());
        assert!(!app.session.is_logged_in());
        assert_eq!(app.catalog.categories().len(), 4);
        assert!(app.basket.is_empty());
    }
}

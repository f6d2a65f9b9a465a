//! Session lifecycle
//!
//! Owns the current identity (mobile number + role): restore the persisted
//! record at startup, establish on login, clear on logout. The role is
//! decided by exact match against two reserved access codes; the two-code
//! scheme is a shared-secret placeholder kept as-is for parity, not a
//! credential system, and must not be extended without a product decision.

use std::sync::Arc;

use shared::models::{UserRole, UserSession};
use thiserror::Error;

use crate::storage::{KvStore, StoreError};

/// Storage key of the persisted identity record
pub const USER_KEY: &str = "user";

/// Access code granting the admin role
const ADMIN_CODE: &str = "AAHAR2024";
/// Access code granting the customer role
const CUSTOMER_CODE: &str = "CUSTOMER24";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter mobile number and code")]
    MissingCredentials,

    #[error("Invalid code. Please try again.")]
    InvalidCode,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Session state container
///
/// At most one identity is logged in at a time. All reads are synchronous;
/// only the persisted-record IO suspends.
pub struct SessionManager {
    store: Arc<dyn KvStore>,
    user: Option<UserSession>,
    loading: bool,
}

impl SessionManager {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            user: None,
            loading: true,
        }
    }

    /// Restore the persisted identity, if any
    ///
    /// Runs once at startup, before gated screens are reachable. Storage
    /// failures and malformed records are logged and leave the user logged
    /// out; they never surface to the UI.
    pub async fn restore(&mut self) {
        match self.store.get(USER_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<UserSession>(&raw) {
                Ok(session) => {
                    tracing::info!(mobile = %session.mobile_number, role = %session.role, "Restored session");
                    self.user = Some(session);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Persisted session is malformed, ignoring");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Error checking login status");
            }
        }
        self.loading = false;
    }

    /// Log in with a mobile number and access code
    ///
    /// `AAHAR2024` grants admin, `CUSTOMER24` grants customer; anything
    /// else is rejected without establishing a session. On success the
    /// session is set in memory, persisted, and the role returned.
    pub async fn login(&mut self, mobile_number: &str, code: &str) -> Result<UserRole, AuthError> {
        if mobile_number.is_empty() || code.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let role = match code {
            ADMIN_CODE => UserRole::Admin,
            CUSTOMER_CODE => UserRole::Customer,
            _ => return Err(AuthError::InvalidCode),
        };

        let session = UserSession {
            mobile_number: mobile_number.to_string(),
            role,
            login_time: chrono::Utc::now().to_rfc3339(),
        };

        // In-memory state first, then the persisted copy
        let raw = serde_json::to_string(&session).map_err(StoreError::from)?;
        self.user = Some(session);
        self.store.set(USER_KEY, &raw).await?;

        tracing::info!(mobile = %mobile_number, role = %role, "Logged in");
        Ok(role)
    }

    /// Log out
    ///
    /// Clears the in-memory session unconditionally; a failure deleting the
    /// persisted record is logged and ignored.
    pub async fn logout(&mut self) {
        self.user = None;
        match self.store.remove(USER_KEY).await {
            Ok(()) => tracing::debug!("Persisted session cleared"),
            Err(e) => tracing::warn!(error = %e, "Error during logout"),
        }
    }

    /// The current identity, when logged in
    pub fn current(&self) -> Option<&UserSession> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(UserRole::Admin)
    }

    /// True until the startup restore has completed
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

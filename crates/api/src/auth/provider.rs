//! The auth provider boundary.

use async_trait::async_trait;
use folio_core::auth::{AuthErrorCode, User};
use tokio::sync::watch;

/// The provider's view of the signed-in principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub user: User,
    /// Short-lived credential forwarded to the document store.
    pub id_token: String,
}

/// A hosted authentication service.
///
/// Session changes are published on a `watch` channel. A fresh receiver
/// observes the current session immediately and every change after that.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Verify credentials and make the principal the current session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthErrorCode>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthErrorCode>;

    /// Ask the provider to email a password-reset link to `email`.
    async fn send_password_reset(&self, email: &str) -> Result<(), AuthErrorCode>;

    /// Subscribe to session changes.
    fn subscribe(&self) -> watch::Receiver<Option<ProviderSession>>;
}

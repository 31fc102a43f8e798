//! In-process [`AuthProvider`] for local development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use folio_core::auth::{AuthErrorCode, User};
use folio_core::validation::rules::validate_email;
use tokio::sync::{watch, RwLock};

use super::provider::{AuthProvider, ProviderSession};

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    password: String,
    display_name: Option<String>,
    disabled: bool,
}

/// Email/password accounts held in memory.
pub struct MemoryAuthProvider {
    accounts: RwLock<HashMap<String, Account>>,
    session: watch::Sender<Option<ProviderSession>>,
    /// Addresses a reset email was "sent" to, in order.
    resets: RwLock<Vec<String>>,
}

impl Default for MemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthProvider {
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        Self {
            accounts: RwLock::new(HashMap::new()),
            session,
            resets: RwLock::new(Vec::new()),
        }
    }

    /// Register an account and return its uid.
    pub async fn add_account(&self, email: &str, password: &str) -> String {
        let uid = uuid::Uuid::new_v4().simple().to_string();
        self.accounts.write().await.insert(
            email.to_string(),
            Account {
                uid: uid.clone(),
                password: password.to_string(),
                display_name: None,
                disabled: false,
            },
        );
        uid
    }

    /// Disable or re-enable an account. Unknown emails are ignored.
    pub async fn set_disabled(&self, email: &str, disabled: bool) {
        if let Some(account) = self.accounts.write().await.get_mut(email) {
            account.disabled = disabled;
        }
    }

    pub async fn sent_resets(&self) -> Vec<String> {
        self.resets.read().await.clone()
    }

    async fn lookup(&self, email: &str) -> Result<Account, AuthErrorCode> {
        if !validate_email(email).is_empty() {
            return Err(AuthErrorCode::InvalidEmail);
        }
        self.accounts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(AuthErrorCode::UserNotFound)
    }
}

#[async_trait]
impl AuthProvider for MemoryAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthErrorCode> {
        let account = self.lookup(email).await?;
        if account.disabled {
            return Err(AuthErrorCode::UserDisabled);
        }
        if account.password != password {
            return Err(AuthErrorCode::WrongPassword);
        }

        let user = User {
            uid: account.uid.clone(),
            email: Some(email.to_string()),
            display_name: account.display_name,
        };
        self.session.send_replace(Some(ProviderSession {
            user: user.clone(),
            id_token: format!("memory-{}", account.uid),
        }));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthErrorCode> {
        self.session.send_replace(None);
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthErrorCode> {
        self.lookup(email).await?;
        self.resets.write().await.push(email.to_string());
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<ProviderSession>> {
        self.session.subscribe()
    }
}

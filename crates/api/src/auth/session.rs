//! The process-wide auth session.
//!
//! [`AuthSession`] is created once at startup and shared through the app
//! state. It mirrors the provider's current principal: a listener task
//! applies every provider session notification, and `login`/`logout` apply
//! their result immediately so callers observe it without waiting for the
//! notification. The next notification always wins.
//!
//! Until the first notification has been processed the session reports
//! `loading == true`; afterwards `loading` stays `false`.

use std::sync::Arc;

use folio_core::auth::{login_message, logout_message, reset_message, User};
use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::provider::{AuthProvider, ProviderSession};
use super::AuthError;

/// Snapshot of the session as seen by handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

pub struct AuthSession {
    provider: Arc<dyn AuthProvider>,
    state: Arc<watch::Sender<SessionState>>,
    cancel: CancellationToken,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl AuthSession {
    /// Create the session and start listening to the provider.
    pub fn start(provider: Arc<dyn AuthProvider>) -> Arc<Self> {
        let (state, _) = watch::channel(SessionState::default());
        let state = Arc::new(state);
        let cancel = CancellationToken::new();

        let listener = tokio::spawn(listen(
            provider.subscribe(),
            Arc::clone(&state),
            cancel.clone(),
        ));

        Arc::new(Self {
            provider,
            state,
            cancel,
            listener: Mutex::new(Some(listener)),
        })
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Resolve once the first provider notification has been applied.
    pub async fn ready(&self) {
        let mut rx = self.state.subscribe();
        // Only fails if the sender is dropped, which cannot happen while
        // `self` is alive.
        let _ = rx.wait_for(|s| !s.loading).await;
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self.provider.sign_in(email, password).await {
            Ok(user) => {
                tracing::info!(uid = %user.uid, "Admin signed in");
                let mirrored = user.clone();
                self.state.send_modify(|s| s.user = Some(mirrored));
                Ok(user)
            }
            Err(code) => {
                tracing::warn!(code = ?code, "Sign-in failed");
                Err(AuthError::new(login_message(&code), code))
            }
        }
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        match self.provider.sign_out().await {
            Ok(()) => {
                tracing::info!("Admin signed out");
                self.state.send_modify(|s| s.user = None);
                Ok(())
            }
            Err(code) => {
                tracing::warn!(code = ?code, "Sign-out failed");
                Err(AuthError::new(logout_message(&code), code))
            }
        }
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.provider
            .send_password_reset(email)
            .await
            .map(|()| tracing::info!("Password reset email sent"))
            .map_err(|code| {
                tracing::warn!(code = ?code, "Password reset failed");
                AuthError::new(reset_message(&code), code)
            })
    }

    /// Stop the listener task. Safe to call more than once.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        if let Some(handle) = self.listener.lock().await.take() {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Auth listener task ended abnormally");
            }
        }
    }
}

/// Apply provider notifications until cancelled or the provider goes away.
async fn listen(
    mut sessions: watch::Receiver<Option<ProviderSession>>,
    state: Arc<watch::Sender<SessionState>>,
    cancel: CancellationToken,
) {
    loop {
        let user = sessions.borrow_and_update().as_ref().map(|s| s.user.clone());
        tracing::debug!(signed_in = user.is_some(), "Auth state changed");
        state.send_modify(|s| {
            s.user = user;
            s.loading = false;
        });

        tokio::select! {
            () = cancel.cancelled() => break,
            changed = sessions.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("Auth listener stopped");
}

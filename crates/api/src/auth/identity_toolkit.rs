//! Identity Toolkit REST implementation of [`AuthProvider`].
//!
//! Wraps `accounts:signInWithPassword` and `accounts:sendOobCode`, and keeps
//! the id token fresh through the secure-token endpoint. Error bodies have the
//! shape `{"error": {"code": 400, "message": "EMAIL_NOT_FOUND"}}`; the message
//! may carry a trailing explanation after `" : "`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::auth::{AuthErrorCode, User};
use folio_core::types::Timestamp;
use folio_db::config::FirebaseConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::{watch, RwLock};
use tokio_util::sync::CancellationToken;

use super::provider::{AuthProvider, ProviderSession};

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const SECURE_TOKEN_URL: &str = "https://securetoken.googleapis.com/v1/token";

/// Refresh the id token this long before it expires.
const REFRESH_MARGIN: Duration = Duration::from_secs(5 * 60);

/// Wait after a refresh attempt that failed on the network.
const REFRESH_RETRY: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
    /// Lifetime of `id_token` in seconds, sent as a string.
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
    expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Refresh credential for the current session.
#[derive(Debug, Clone)]
struct Credentials {
    refresh_token: String,
    expires_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Hosted email/password auth for one project.
pub struct IdentityToolkitProvider {
    client: reqwest::Client,
    api_key: String,
    session: watch::Sender<Option<ProviderSession>>,
    credentials: RwLock<Option<Credentials>>,
}

impl IdentityToolkitProvider {
    pub fn new(config: &FirebaseConfig) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            session,
            credentials: RwLock::new(None),
        }
    }

    /// Keep the session's id token fresh until `cancel` fires.
    ///
    /// Sleeps until shortly before the token expires, then exchanges the
    /// refresh token. A rejected refresh token ends the session.
    pub async fn run_token_refresh(self: Arc<Self>, cancel: CancellationToken) {
        let mut sessions = self.session.subscribe();
        loop {
            let due = self.refresh_due().await;
            tokio::select! {
                () = cancel.cancelled() => break,
                changed = sessions.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                () = sleep_until_due(due) => {
                    if let Err(code) = self.refresh().await {
                        if code == AuthErrorCode::NetworkRequestFailed {
                            tracing::warn!("Token refresh failed on the network, retrying");
                            tokio::time::sleep(REFRESH_RETRY).await;
                        } else {
                            tracing::warn!(code = ?code, "Token refresh rejected, signing out");
                            self.clear().await;
                        }
                    }
                }
            }
        }
        tracing::debug!("Token refresh task stopped");
    }

    // ---- private helpers ----

    async fn refresh_due(&self) -> Option<Duration> {
        let creds = self.credentials.read().await;
        let expires_at = creds.as_ref()?.expires_at;
        let margin = chrono::Duration::seconds(REFRESH_MARGIN.as_secs() as i64);
        let wait = (expires_at - margin - chrono::Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        Some(wait)
    }

    async fn refresh(&self) -> Result<(), AuthErrorCode> {
        let Some(creds) = self.credentials.read().await.clone() else {
            return Ok(());
        };
        let body = json!({
            "grant_type": "refresh_token",
            "refresh_token": creds.refresh_token,
        });
        let refreshed: RefreshResponse = self.post(SECURE_TOKEN_URL, &body).await?;

        *self.credentials.write().await = Some(Credentials {
            refresh_token: refreshed.refresh_token,
            expires_at: expires_at(&refreshed.expires_in),
        });
        self.session.send_modify(|session| {
            if let Some(session) = session {
                session.id_token = refreshed.id_token;
            }
        });
        tracing::debug!("Id token refreshed");
        Ok(())
    }

    async fn clear(&self) {
        *self.credentials.write().await = None;
        self.session.send_replace(None);
    }

    /// POST `body` as JSON and decode the response, mapping failures to
    /// provider codes.
    async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, AuthErrorCode> {
        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(parse_error_code(&text));
        }
        response.json::<T>().await.map_err(classify_transport_error)
    }
}

#[async_trait]
impl AuthProvider for IdentityToolkitProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthErrorCode> {
        let url = format!("{IDENTITY_TOOLKIT_URL}/accounts:signInWithPassword");
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let signed_in: SignInResponse = self.post(&url, &body).await?;

        let user = User {
            uid: signed_in.local_id,
            email: signed_in.email.filter(|e| !e.is_empty()),
            display_name: signed_in.display_name.filter(|n| !n.is_empty()),
        };
        *self.credentials.write().await = Some(Credentials {
            refresh_token: signed_in.refresh_token,
            expires_at: expires_at(&signed_in.expires_in),
        });
        self.session.send_replace(Some(ProviderSession {
            user: user.clone(),
            id_token: signed_in.id_token,
        }));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthErrorCode> {
        // Sessions are client-held; signing out forgets the tokens.
        self.clear().await;
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthErrorCode> {
        let url = format!("{IDENTITY_TOOLKIT_URL}/accounts:sendOobCode");
        let body = json!({
            "requestType": "PASSWORD_RESET",
            "email": email,
        });
        let _: serde_json::Value = self.post(&url, &body).await?;
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<ProviderSession>> {
        self.session.subscribe()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn sleep_until_due(due: Option<Duration>) {
    match due {
        Some(wait) => tokio::time::sleep(wait).await,
        None => std::future::pending().await,
    }
}

/// Absolute expiry for a token lifetime given in seconds. An unparsable
/// lifetime falls back to the provider's one-hour default.
fn expires_at(expires_in: &str) -> Timestamp {
    let secs = expires_in.parse::<i64>().unwrap_or(3600);
    chrono::Utc::now() + chrono::Duration::seconds(secs)
}

fn classify_transport_error(err: reqwest::Error) -> AuthErrorCode {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        AuthErrorCode::NetworkRequestFailed
    } else {
        tracing::warn!(error = %err, "Unexpected auth provider response");
        AuthErrorCode::Other("INVALID_RESPONSE".into())
    }
}

/// Map an error body to a provider code.
fn parse_error_code(body: &str) -> AuthErrorCode {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return AuthErrorCode::Other("UNPARSEABLE_ERROR".into());
    };
    let code = envelope
        .error
        .message
        .split(" : ")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    match code.as_str() {
        "INVALID_EMAIL" => AuthErrorCode::InvalidEmail,
        "USER_DISABLED" => AuthErrorCode::UserDisabled,
        "EMAIL_NOT_FOUND" => AuthErrorCode::UserNotFound,
        "INVALID_PASSWORD" => AuthErrorCode::WrongPassword,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthErrorCode::TooManyAttempts,
        _ => AuthErrorCode::Other(code),
    }
}

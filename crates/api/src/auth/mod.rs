//! Authentication: the provider boundary, its implementations, the
//! process-wide auth session, and admin bearer tokens.
//!
//! - [`provider`] -- the [`AuthProvider`](provider::AuthProvider) trait.
//! - [`identity_toolkit`] -- hosted Identity Toolkit REST provider.
//! - [`memory`] -- in-process provider for local development and tests.
//! - [`session`] -- [`AuthSession`](session::AuthSession), the auth context.
//! - [`jwt`] -- HS256 access tokens issued to the admin after login.

pub mod identity_toolkit;
pub mod jwt;
pub mod memory;
pub mod provider;
pub mod session;

use folio_core::auth::AuthErrorCode;

/// A failed auth operation: the user-facing message plus the provider code
/// it was mapped from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
    pub code: AuthErrorCode,
}

impl AuthError {
    pub fn new(message: &str, code: AuthErrorCode) -> Self {
        Self {
            message: message.to_string(),
            code,
        }
    }
}

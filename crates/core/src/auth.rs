//! Auth principal projection and the provider error taxonomy.
//!
//! Provider errors are never shown to end users verbatim. Each auth operation
//! maps a small set of [`AuthErrorCode`]s to fixed messages and falls back to a
//! generic "try again" message for everything else.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Read-only projection of the authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Error codes reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorCode {
    InvalidEmail,
    UserDisabled,
    UserNotFound,
    WrongPassword,
    TooManyAttempts,
    NetworkRequestFailed,
    /// Any code without a dedicated message. Carries the raw provider code
    /// for logging only.
    Other(String),
}

pub const MSG_INVALID_EMAIL: &str = "Invalid email address.";
pub const MSG_USER_DISABLED: &str = "This account has been disabled.";
pub const MSG_USER_NOT_FOUND: &str = "No account found with this email.";
pub const MSG_WRONG_PASSWORD: &str = "Incorrect password.";
pub const MSG_TOO_MANY_ATTEMPTS: &str = "Too many failed attempts. Please try again later.";
pub const MSG_NETWORK: &str = "Network error. Please check your internet connection.";
pub const MSG_LOGIN_FAILED: &str = "Failed to login. Please try again.";
pub const MSG_LOGOUT_FAILED: &str = "Failed to logout. Please try again.";
pub const MSG_RESET_FAILED: &str = "Failed to send password reset email.";

/// User-facing message for a failed sign-in.
pub fn login_message(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::InvalidEmail => MSG_INVALID_EMAIL,
        AuthErrorCode::UserDisabled => MSG_USER_DISABLED,
        AuthErrorCode::UserNotFound => MSG_USER_NOT_FOUND,
        AuthErrorCode::WrongPassword => MSG_WRONG_PASSWORD,
        AuthErrorCode::TooManyAttempts => MSG_TOO_MANY_ATTEMPTS,
        AuthErrorCode::NetworkRequestFailed => MSG_NETWORK,
        AuthErrorCode::Other(_) => MSG_LOGIN_FAILED,
    }
}

/// User-facing message for a failed sign-out.
pub fn logout_message(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::NetworkRequestFailed => MSG_NETWORK,
        _ => MSG_LOGOUT_FAILED,
    }
}

/// User-facing message for a failed password-reset dispatch.
pub fn reset_message(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::UserNotFound => MSG_USER_NOT_FOUND,
        AuthErrorCode::InvalidEmail => MSG_INVALID_EMAIL,
        AuthErrorCode::NetworkRequestFailed => MSG_NETWORK,
        _ => MSG_RESET_FAILED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_maps_every_known_code() {
        assert_eq!(login_message(&AuthErrorCode::InvalidEmail), MSG_INVALID_EMAIL);
        assert_eq!(login_message(&AuthErrorCode::UserDisabled), MSG_USER_DISABLED);
        assert_eq!(login_message(&AuthErrorCode::UserNotFound), MSG_USER_NOT_FOUND);
        assert_eq!(login_message(&AuthErrorCode::WrongPassword), MSG_WRONG_PASSWORD);
        assert_eq!(
            login_message(&AuthErrorCode::TooManyAttempts),
            MSG_TOO_MANY_ATTEMPTS
        );
        assert_eq!(
            login_message(&AuthErrorCode::NetworkRequestFailed),
            MSG_NETWORK
        );
    }

    #[test]
    fn unmapped_codes_fall_back_to_generic_messages() {
        let other = AuthErrorCode::Other("INVALID_LOGIN_CREDENTIALS".into());
        assert_eq!(login_message(&other), MSG_LOGIN_FAILED);
        assert_eq!(logout_message(&other), MSG_LOGOUT_FAILED);
        assert_eq!(reset_message(&other), MSG_RESET_FAILED);
    }

    #[test]
    fn logout_only_special_cases_network() {
        assert_eq!(
            logout_message(&AuthErrorCode::NetworkRequestFailed),
            MSG_NETWORK
        );
        assert_eq!(
            logout_message(&AuthErrorCode::UserNotFound),
            MSG_LOGOUT_FAILED
        );
    }

    #[test]
    fn reset_does_not_reveal_password_errors() {
        assert_eq!(
            reset_message(&AuthErrorCode::WrongPassword),
            MSG_RESET_FAILED
        );
        assert_eq!(reset_message(&AuthErrorCode::UserNotFound), MSG_USER_NOT_FOUND);
    }
}

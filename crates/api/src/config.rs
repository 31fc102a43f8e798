use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Which backend pair (document store + auth provider) the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Hosted Firestore and Identity Toolkit over REST.
    Firebase,
    /// In-process store and auth provider seeded with one dev admin.
    Memory,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firebase" => Ok(BackendKind::Firebase),
            "memory" => Ok(BackendKind::Memory),
            other => Err(format!(
                "Unknown backend '{other}'. Must be 'firebase' or 'memory'"
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Backend selection (default: `firebase`).
    pub backend: BackendKind,
    /// JWT token configuration for admin bearer tokens.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `FOLIO_BACKEND`        | `firebase`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend: BackendKind = std::env::var("FOLIO_BACKEND")
            .unwrap_or_else(|_| "firebase".into())
            .parse()
            .unwrap_or_else(|e| panic!("FOLIO_BACKEND: {e}"));

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            backend,
            jwt,
        }
    }
}

/// Credentials for the account seeded into the in-memory auth provider.
#[derive(Debug, Clone)]
pub struct DevAdmin {
    pub email: String,
    pub password: String,
}

impl DevAdmin {
    /// | Env Var              | Default             |
    /// |----------------------|---------------------|
    /// | `DEV_ADMIN_EMAIL`    | `admin@example.com` |
    /// | `DEV_ADMIN_PASSWORD` | `changeme`          |
    pub fn from_env() -> Self {
        Self {
            email: std::env::var("DEV_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".into()),
            password: std::env::var("DEV_ADMIN_PASSWORD").unwrap_or_else(|_| "changeme".into()),
        }
    }
}

use std::fmt::Debug;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Default number of students per directory page.
const DEFAULT_DIRECTORY_PAGE_SIZE: i64 = 3;

/// Server configuration loaded from environment variables.
///
/// Everything except the JWT secret has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Students per directory page (default: `3`).
    pub directory_page_size: i64,
    /// JWT token configuration (secret, expiry).
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
    /// | `DIRECTORY_PAGE_SIZE`  | `3`                        |
    ///
    /// # Panics
    ///
    /// Panics on unparseable values or a non-positive page size; bad
    /// configuration must stop startup, not limp along.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let directory_page_size: i64 = env_or("DIRECTORY_PAGE_SIZE", DEFAULT_DIRECTORY_PAGE_SIZE);
        assert!(
            directory_page_size > 0,
            "DIRECTORY_PAGE_SIZE must be positive"
        );

        Self {
            host,
            port: env_or("PORT", 3000u16),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30u64),
            directory_page_size,
            jwt: JwtConfig::from_env(),
        }
    }
}

/// Read an env var, falling back to `default`, panicking on parse failure.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} is not valid: {e:?}")),
        Err(_) => default,
    }
}

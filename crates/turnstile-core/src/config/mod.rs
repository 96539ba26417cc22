//! Configuration resolved from the process environment.
//!
//! Turnstile is configured entirely through environment variables, optionally
//! seeded from a `local.env` file by the server binary. There is no config
//! file format. Everything here is read once at startup and immutable for
//! the process lifetime.

use std::env;
use thiserror::Error;

/// Environment variable holding the token signing secret.
pub const SECRET_ENV: &str = "SIGN";
/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";
/// Environment variable holding the allowed CORS origin.
pub const ALLOW_ORIGIN_ENV: &str = "ALLOW_ORIGIN";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0";
const DEFAULT_LISTEN_PORT: u16 = 8080;
const DEFAULT_ALLOW_ORIGIN: &str = "http://localhost:8080";

/// Errors raised while resolving configuration at startup.
///
/// All of these are fatal: the process refuses to start with a broken
/// configuration rather than serving with an inoperable auth subsystem.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret variable is not set.
    #[error("environment variable {0} is not set")]
    MissingSecret(&'static str),

    /// The signing secret is set but empty.
    #[error("environment variable {0} is empty; refusing to sign or verify tokens")]
    EmptySecret(&'static str),

    /// The listen port could not be parsed.
    #[error("invalid {PORT_ENV} value '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Token signing settings.
    pub auth: AuthConfig,
    /// Admission control settings for the rate-limited endpoint.
    pub rate_limit: RateLimitConfig,
    /// CORS settings for browser-facing callers.
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Resolve the full configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            rate_limit: RateLimitConfig::default(),
            cors: CorsConfig::from_env(),
        })
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub listen_addr: String,
    /// Bind port.
    pub listen_port: u16,
}

impl ServerConfig {
    /// Resolve listener settings; `PORT` falls back to 8080 when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(PORT_ENV)
    }

    fn from_env_var(var: &'static str) -> Result<Self, ConfigError> {
        let listen_port = match env::var(var) {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort {
                    value: value.clone(),
                    source,
                })?,
            Err(_) => DEFAULT_LISTEN_PORT,
        };

        Ok(Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            listen_port,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
        }
    }
}

/// Token signing settings.
///
/// The secret is consumed as raw bytes with no format validation beyond
/// "non-empty".
#[derive(Clone)]
pub struct AuthConfig {
    /// Raw secret bytes shared by issuance and verification.
    pub secret: Vec<u8>,
}

impl AuthConfig {
    /// Resolve the signing secret from `SIGN`. Missing or empty is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(SECRET_ENV)
    }

    fn from_env_var(var: &'static str) -> Result<Self, ConfigError> {
        let value = env::var(var).map_err(|_| ConfigError::MissingSecret(var))?;
        if value.is_empty() {
            return Err(ConfigError::EmptySecret(var));
        }
        Ok(Self {
            secret: value.into_bytes(),
        })
    }
}

// Keep the secret out of Debug output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Admission control settings for the rate-limited endpoint.
///
/// One bucket shared globally across all callers; capacity and refill rate
/// are fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Maximum burst size.
    pub capacity: u32,
    /// Tokens refilled per second.
    pub refill_per_sec: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            refill_per_sec: 5,
        }
    }
}

/// CORS settings for browser-facing callers.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// The single allowed origin.
    pub allow_origin: String,
}

impl CorsConfig {
    /// Resolve the allowed origin; defaults to the local frontend.
    pub fn from_env() -> Self {
        Self::from_env_var(ALLOW_ORIGIN_ENV)
    }

    fn from_env_var(var: &'static str) -> Self {
        Self {
            allow_origin: env::var(var).unwrap_or_else(|_| DEFAULT_ALLOW_ORIGIN.to_string()),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_env_var("TURNSTILE_TEST_PORT_UNSET").unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0");
        assert_eq!(config.listen_port, 8080);
    }

    #[test]
    fn test_server_config_from_env() {
        // SAFETY: We're in a test and the variable name is unique to it
        unsafe {
            env::set_var("TURNSTILE_TEST_PORT_SET", "9090");
        }

        let config = ServerConfig::from_env_var("TURNSTILE_TEST_PORT_SET").unwrap();
        assert_eq!(config.listen_port, 9090);

        // SAFETY: Cleanup in test
        unsafe {
            env::remove_var("TURNSTILE_TEST_PORT_SET");
        }
    }

    #[test]
    fn test_server_config_rejects_bad_port() {
        // SAFETY: We're in a test and the variable name is unique to it
        unsafe {
            env::set_var("TURNSTILE_TEST_PORT_BAD", "not-a-port");
        }

        let err = ServerConfig::from_env_var("TURNSTILE_TEST_PORT_BAD").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));

        // SAFETY: Cleanup in test
        unsafe {
            env::remove_var("TURNSTILE_TEST_PORT_BAD");
        }
    }

    #[test]
    fn test_auth_config_missing_secret_is_fatal() {
        let err = AuthConfig::from_env_var("TURNSTILE_TEST_SIGN_UNSET").unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret(_)));
    }

    #[test]
    fn test_auth_config_empty_secret_is_fatal() {
        // SAFETY: We're in a test and the variable name is unique to it
        unsafe {
            env::set_var("TURNSTILE_TEST_SIGN_EMPTY", "");
        }

        let err = AuthConfig::from_env_var("TURNSTILE_TEST_SIGN_EMPTY").unwrap_err();
        assert!(matches!(err, ConfigError::EmptySecret(_)));

        // SAFETY: Cleanup in test
        unsafe {
            env::remove_var("TURNSTILE_TEST_SIGN_EMPTY");
        }
    }

    #[test]
    fn test_auth_config_debug_redacts_secret() {
        let config = AuthConfig {
            secret: b"super-secret".to_vec(),
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_rate_limit_defaults() {
        let config = RateLimitConfig::default();
        assert_eq!(config.capacity, 5);
        assert_eq!(config.refill_per_sec, 5);
    }

    #[test]
    fn test_cors_default_origin() {
        let config = CorsConfig::from_env_var("TURNSTILE_TEST_ORIGIN_UNSET");
        assert_eq!(config.allow_origin, "http://localhost:8080");
    }
}

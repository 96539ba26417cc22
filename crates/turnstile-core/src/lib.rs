// Configuration types shared across all Turnstile crates
pub mod config;

// Re-export commonly used config types for convenience
pub use config::{
    AppConfig,
    AuthConfig,
    ConfigError,
    CorsConfig,
    RateLimitConfig,
    ServerConfig,
};

//! # card-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, BackendConfig, ConfigError, CorsConfig, Environment,
    NoticesTransport, RateLimitConfig, ServerConfig, SiteConfig,
};
pub use error::AppError;
pub use telemetry::{
    redact_token, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};

//! # folio-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! asset URL derivation, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{AccessClaims, TokenVerifier};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use storage::BucketAssetUrls;
pub use telemetry::{init_tracing, init_tracing_with_config, TracingConfig, TracingError};

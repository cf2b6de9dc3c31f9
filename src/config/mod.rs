//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, environment overlay)
//!     → validation.rs (semantic checks)
//!     → EdgeConfig (validated, immutable)
//!     → handlers built from it, shared via Arc
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → new handler set swapped in atomically
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Secrets are never defaulted; they must be injected

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{apply_env_overrides, load_config, ConfigError};
pub use schema::{
    CookieConfig, CorsConfig, EdgeConfig, FilterConfig, ListenerConfig, ObservabilityConfig,
    OriginConfig, TimeoutConfig,
};

//! Static gateway handlers.
//!
//! # Design Decisions
//! - Handlers are pure functions of configuration; requests are not inspected
//! - A `HandlerSet` is built whole from one config and never mutated

pub mod cookie;
pub mod cors;
pub mod invoke;
pub mod response;

pub use cookie::{CookieGrant, CookieIssuer};
pub use cors::CorsResponder;
pub use invoke::{invoke, InvokeError, InvokeTarget};
pub use response::HandlerResponse;

use crate::config::{ConfigError, EdgeConfig};
use crate::edge::EdgeFilter;

/// Every handler the gateway hosts, built from a single configuration.
#[derive(Debug, Clone)]
pub struct HandlerSet {
    pub filter: EdgeFilter,
    pub cors: CorsResponder,
    pub cookie: CookieIssuer,
}

impl HandlerSet {
    pub fn from_config(config: &EdgeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            filter: EdgeFilter::from_config(&config.filter)?,
            cors: CorsResponder::new(config.cors.clone()),
            cookie: CookieIssuer::new(config.cookie.clone(), &config.cors),
        })
    }
}

//! One-shot handler invocation.
//!
//! Runs a single handler against the configuration (and, for the filter, an
//! edge event) and renders the JSON the edge runtime would receive.

use clap::ValueEnum;
use thiserror::Error;

use crate::config::{ConfigError, EdgeConfig};
use crate::edge::{EdgeEvent, EdgeFilter};
use crate::handlers::{CookieIssuer, CorsResponder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InvokeTarget {
    EdgeFilter,
    Cors,
    ApplyCookie,
}

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("edge-filter needs an event")]
    MissingEvent,

    #[error("malformed event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Run `target` once and return its pretty-printed JSON result.
///
/// A malformed event is an error, never a deny decision.
pub fn invoke(
    config: &EdgeConfig,
    target: InvokeTarget,
    raw_event: Option<&str>,
) -> Result<String, InvokeError> {
    match target {
        InvokeTarget::EdgeFilter => {
            let filter = EdgeFilter::from_config(&config.filter)?;
            let raw = raw_event.ok_or(InvokeError::MissingEvent)?;
            let event: EdgeEvent = serde_json::from_str(raw).map_err(InvokeError::MalformedEvent)?;
            serde_json::to_string_pretty(&filter.handle_event(event)).map_err(InvokeError::Encode)
        }
        InvokeTarget::Cors => {
            serde_json::to_string_pretty(&CorsResponder::new(config.cors.clone()).respond())
                .map_err(InvokeError::Encode)
        }
        InvokeTarget::ApplyCookie => {
            let issuer = CookieIssuer::new(config.cookie.clone(), &config.cors);
            let response = issuer.respond().map_err(InvokeError::Encode)?;
            serde_json::to_string_pretty(&response).map_err(InvokeError::Encode)
        }
    }
}

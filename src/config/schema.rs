//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Header list the deployed cookie and CORS handlers allow by default.
pub const DEFAULT_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Root configuration for the edge gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct EdgeConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Edge access filter settings.
    pub filter: FilterConfig,

    /// CORS preflight responder settings.
    pub cors: CorsConfig,

    /// Cookie issuance stub settings.
    pub cookie: CookieConfig,

    /// Static origin served behind the filter.
    pub origin: OriginConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Edge access filter configuration.
///
/// The credential is either given verbatim (`credential = "Basic ..."`) or
/// built from `username` and `password`. There is no default secret.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Exact `authorization` header value to accept.
    pub credential: Option<String>,

    /// Basic-auth user id, used with `password` when `credential` is unset.
    pub username: Option<String>,

    /// Basic-auth password.
    pub password: Option<String>,

    /// Document appended to directory-style URIs.
    pub index_document: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            credential: None,
            username: None,
            password: None,
            index_document: "index.html".to_string(),
        }
    }
}

/// CORS preflight responder configuration.
///
/// Unset header values are left out of the response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Emit `Access-Control-Allow-Credentials: true`.
    pub allow_credentials: bool,
    pub allow_headers: Option<String>,
    pub allow_methods: Option<String>,
    pub allow_origins: Option<String>,
    /// `Content-Type` of the empty preflight body.
    pub content_type: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_credentials: true,
            allow_headers: None,
            allow_methods: None,
            allow_origins: None,
            content_type: "plain/text".to_string(),
        }
    }
}

/// Cookie issuance stub configuration.
///
/// Values are passed through as-is; nothing is signed here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CookieConfig {
    pub policy: Option<String>,
    pub signature: Option<String>,
    pub key_pair: Option<String>,
    /// `Access-Control-Allow-Headers` sent with the grant.
    pub allow_headers: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            policy: None,
            signature: None,
            key_pair: None,
            allow_headers: DEFAULT_ALLOW_HEADERS.to_string(),
        }
    }
}

/// Static origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OriginConfig {
    /// Directory served to requests the filter allows.
    pub root: String,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            root: "public".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

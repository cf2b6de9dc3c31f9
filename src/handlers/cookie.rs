//! Signed-cookie issuance stub.
//!
//! Hands out the configured `{policy, signature, keyPair}` triple. No
//! signing happens here; the values are produced elsewhere and injected
//! through configuration.

use serde::Serialize;

use crate::config::{CookieConfig, CorsConfig};
use crate::handlers::response::HandlerResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CookieIssuer {
    grant: CookieGrant,
    allow_headers: String,
    allow_methods: Option<String>,
    allow_origins: Option<String>,
}

impl CookieIssuer {
    pub fn new(cookie: CookieConfig, cors: &CorsConfig) -> Self {
        Self {
            grant: CookieGrant {
                policy: cookie.policy,
                signature: cookie.signature,
                key_pair: cookie.key_pair,
            },
            allow_headers: cookie.allow_headers,
            allow_methods: cors.allow_methods.clone(),
            allow_origins: cors.allow_origins.clone(),
        }
    }

    pub fn grant(&self) -> &CookieGrant {
        &self.grant
    }

    pub fn respond(&self) -> Result<HandlerResponse, serde_json::Error> {
        let body = serde_json::to_string(&self.grant)?;
        Ok(HandlerResponse::ok()
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Headers", self.allow_headers.as_str())
            .optional_header("Access-Control-Allow-Methods", self.allow_methods.as_deref())
            .optional_header("Access-Control-Allow-Origin", self.allow_origins.as_deref())
            .body(body))
    }
}

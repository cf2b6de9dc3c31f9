//! Edge invocation contract: the event handed to the filter and the decision
//! it returns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::edge::headers::EdgeHeaders;

/// Event envelope: `{ "request": { ... } }`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeEvent {
    pub request: EdgeRequest,
}

/// The viewer request seen at the edge.
///
/// Only `uri` and `headers` are interpreted. Every other field of the
/// request object is kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeRequest {
    pub uri: String,

    #[serde(default)]
    pub headers: EdgeHeaders,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeRequest {
    pub fn new(uri: impl Into<String>, headers: EdgeHeaders) -> Self {
        Self {
            uri: uri.into(),
            headers,
            extra: Map::new(),
        }
    }
}

/// Response returned in place of the request when access is refused.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenyResponse {
    pub status_code: u16,
    pub status_description: String,
    pub headers: EdgeHeaders,
}

impl DenyResponse {
    /// `401 Unauthorized` with a `Basic` challenge and no body.
    pub fn unauthorized() -> Self {
        let mut headers = EdgeHeaders::new();
        headers.insert("www-authenticate", "Basic");
        Self {
            status_code: 401,
            status_description: "Unauthorized".to_string(),
            headers,
        }
    }
}

/// Why a request was refused. Both reasons surface as the same 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DenyReason {
    #[error("authorization header missing")]
    Missing,
    #[error("authorization header does not match")]
    Mismatch,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::Missing => "missing",
            DenyReason::Mismatch => "mismatch",
        }
    }
}

/// Terminal outcome of one filter pass.
///
/// Serializes to the request object on allow and to the deny response on
/// refusal, matching what the edge expects back from the function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decision {
    Allow(EdgeRequest),
    Deny(DenyResponse),
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    /// The forwarded request, if access was granted.
    pub fn into_request(self) -> Option<EdgeRequest> {
        match self {
            Decision::Allow(request) => Some(request),
            Decision::Deny(_) => None,
        }
    }
}

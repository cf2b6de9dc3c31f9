//! The edge access filter.

use crate::config::{ConfigError, FilterConfig};
use crate::edge::credential::Credential;
use crate::edge::event::{Decision, DenyReason, DenyResponse, EdgeEvent, EdgeRequest};
use crate::edge::rewrite::resolve_default_document;
use crate::observability::metrics;

/// Gate requests on a static credential and resolve default documents.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct EdgeFilter {
    credential: Credential,
    index_document: String,
}

impl EdgeFilter {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            index_document: "index.html".to_string(),
        }
    }

    /// Document appended to directory-style URIs (default `index.html`).
    pub fn with_index_document(mut self, index_document: impl Into<String>) -> Self {
        self.index_document = index_document.into();
        self
    }

    /// Build a filter from validated configuration.
    ///
    /// `credential` wins over `username`/`password` when both are set.
    pub fn from_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        let credential = match (&config.credential, &config.username, &config.password) {
            (Some(credential), _, _) => Credential::new(credential.clone()),
            (None, Some(user), Some(pass)) => Credential::basic(user, pass),
            _ => return Err(ConfigError::MissingCredential),
        };

        Ok(Self::new(credential).with_index_document(config.index_document.clone()))
    }

    /// Check access, then resolve the default document.
    pub fn evaluate(&self, request: EdgeRequest) -> Decision {
        match self.authorize(&request) {
            Ok(()) => {
                let request = self.rewrite(request);
                tracing::debug!(uri = %request.uri, "Edge request allowed");
                metrics::record_decision("allow", "none");
                Decision::Allow(request)
            }
            Err(reason) => {
                tracing::debug!(uri = %request.uri, reason = reason.as_str(), "Edge request denied");
                metrics::record_decision("deny", reason.as_str());
                Decision::Deny(DenyResponse::unauthorized())
            }
        }
    }

    /// Evaluate the request carried by an edge event.
    pub fn handle_event(&self, event: EdgeEvent) -> Decision {
        self.evaluate(event.request)
    }

    fn authorize(&self, request: &EdgeRequest) -> Result<(), DenyReason> {
        match request.headers.get("authorization") {
            None => Err(DenyReason::Missing),
            Some(value) if self.credential.matches(value) => Ok(()),
            Some(_) => Err(DenyReason::Mismatch),
        }
    }

    fn rewrite(&self, mut request: EdgeRequest) -> EdgeRequest {
        if let Some(uri) = resolve_default_document(&request.uri, &self.index_document) {
            request.uri = uri;
        }
        request
    }
}

//! Request handling and transformation.
//!
//! # Responsibilities
//! - Name the request ID header used for correlation
//! - Project a live HTTP request into the edge event shape
//! - Splice a rewritten path back into the original URI
//!
//! # Design Decisions
//! - The edge `uri` is the path only; the query string travels separately
//! - Header values that are not visible ASCII are left out of the projection

use axum::http::{
    header::HeaderName,
    uri::{PathAndQuery, Uri},
    Request,
};
use serde_json::Value;

use crate::edge::{EdgeHeaders, EdgeRequest};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Build the filter's view of an HTTP request.
pub fn to_edge_request<B>(request: &Request<B>) -> EdgeRequest {
    let headers: EdgeHeaders = request
        .headers()
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|value| (name.as_str(), value)))
        .collect();

    let mut edge_request = EdgeRequest::new(request.uri().path(), headers);
    edge_request
        .extra
        .insert("method".to_string(), Value::String(request.method().to_string()));
    edge_request
}

/// Replace the path of `original`, keeping its query string.
pub fn with_path(original: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match original.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };

    let mut parts = original.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);
    Ok(Uri::from_parts(parts)?)
}

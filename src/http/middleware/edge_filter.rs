//! Edge filter middleware.
//! Gates the origin on the configured credential and resolves default documents.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::edge::Decision;
use crate::http::request::{to_edge_request, with_path};
use crate::http::server::AppState;

pub async fn edge_filter_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let handlers = state.handlers.load_full();

    match handlers.filter.evaluate(to_edge_request(&request)) {
        Decision::Deny(deny) => deny.into_response(),
        Decision::Allow(allowed) => {
            if allowed.uri != request.uri().path() {
                match with_path(request.uri(), &allowed.uri) {
                    Ok(uri) => *request.uri_mut() = uri,
                    Err(e) => {
                        tracing::error!(uri = %allowed.uri, error = %e, "Rewritten URI is invalid");
                        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                    }
                }
            }
            next.run(request).await
        }
    }
}

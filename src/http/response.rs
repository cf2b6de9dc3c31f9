//! Response conversion for filter denials.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::edge::DenyResponse;

impl IntoResponse for DenyResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::UNAUTHORIZED);
        let mut response = Response::new(Body::empty());
        *response.status_mut() = status;

        for (name, value) in self.headers.iter() {
            if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                response.headers_mut().insert(name, value);
            }
        }

        response
    }
}

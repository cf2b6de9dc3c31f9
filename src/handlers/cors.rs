//! CORS preflight responder.

use crate::config::CorsConfig;
use crate::handlers::response::HandlerResponse;

/// Answers preflight requests with the configured CORS headers and an empty
/// body. The request itself is never inspected.
#[derive(Debug, Clone)]
pub struct CorsResponder {
    config: CorsConfig,
}

impl CorsResponder {
    pub fn new(config: CorsConfig) -> Self {
        Self { config }
    }

    pub fn respond(&self) -> HandlerResponse {
        let config = &self.config;
        let mut response = HandlerResponse::ok().header("Content-Type", config.content_type.as_str());
        if config.allow_credentials {
            response = response.header("Access-Control-Allow-Credentials", "true");
        }
        response
            .optional_header("Access-Control-Allow-Headers", config.allow_headers.as_deref())
            .optional_header("Access-Control-Allow-Methods", config.allow_methods.as_deref())
            .optional_header("Access-Control-Allow-Origin", config.allow_origins.as_deref())
    }
}

//! Edge access filter and gateway handlers.
//!
//! The filter gates requests on a static `authorization` credential and
//! resolves directory-style URIs to their index document. Alongside it sit
//! the static CORS preflight responder and the signed-cookie issuance stub,
//! plus a small Axum gateway that hosts all three for local use.

pub mod config;
pub mod edge;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::EdgeConfig;
pub use edge::{Decision, EdgeFilter};
pub use http::HttpServer;
pub use lifecycle::Shutdown;

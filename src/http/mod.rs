//! HTTP gateway subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, trace)
//!     → /_edge/* → static handlers / invoke endpoint
//!     → anything else:
//!         → request.rs (HTTP request → EdgeRequest)
//!         → middleware/edge_filter.rs (allow + rewrite, or deny)
//!         → static origin directory
//!     → response.rs (deny → 401)
//! ```

pub mod middleware;
pub mod reachability;
pub mod request;
pub mod response;
pub mod server;

pub use reachability::{check_reachability, ReachabilityReport};
pub use request::{to_edge_request, X_REQUEST_ID};
pub use server::{AppState, HttpServer};

//! Edge access filter subsystem.
//!
//! # Data Flow
//! ```text
//! EdgeEvent { request }
//!     → filter.rs (authorization check against the credential)
//!         → missing / mismatch: Deny(401, www-authenticate: Basic)
//!     → rewrite.rs (resolve default document)
//!     → Allow(request)
//! ```
//!
//! # Design Decisions
//! - One pass per request, no shared mutable state
//! - Header names are case-insensitive
//! - The only failure is Unauthorized; every other path succeeds

pub mod credential;
pub mod event;
pub mod filter;
pub mod headers;
pub mod rewrite;

pub use credential::Credential;
pub use event::{Decision, DenyReason, DenyResponse, EdgeEvent, EdgeRequest};
pub use filter::EdgeFilter;
pub use headers::EdgeHeaders;
pub use rewrite::resolve_default_document;

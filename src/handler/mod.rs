//! Request handler module
//!
//! Entry point for HTTP request processing: preflight handling, route
//! planning, controller dispatch, boundary header application, and access
//! logging.

pub mod router;

// Re-export main entry point
pub use router::handle_request;

//! Request handler module
//!
//! Request routing dispatch: the rendered document, the placeholder API
//! endpoint, health probes and static assets.

pub mod hello;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;

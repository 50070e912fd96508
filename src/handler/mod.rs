//! Request handler module
//!
//! Path resolution, dispatch on file vs. directory, and the two responders.

pub mod file;
pub mod listing;
pub mod resolve;
pub mod router;

// Re-export main entry point
pub use router::handle_request;

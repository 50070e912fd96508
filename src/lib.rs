//! dirserve: serve a local directory tree over HTTP
//!
//! Request paths resolve under a base directory. Directories come back as an
//! HTML index and files are streamed with a content type picked from their
//! extension.

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

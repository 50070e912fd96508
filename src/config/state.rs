// Application state module
// Immutable per-process state shared by every connection

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use super::types::Config;
use crate::error::ServerError;
use crate::logger::AccessLogFormat;

/// Application state, built once at startup and never mutated
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    /// Absolute base directory every request path resolves under
    pub base_dir: PathBuf,
    pub addr: SocketAddr,
    pub access_log_format: AccessLogFormat,
}

impl AppState {
    /// Validate the loaded configuration and freeze it
    pub fn new(config: Config) -> Result<Self, ServerError> {
        let addr = socket_addr(&config.server.bind, config.server.port)?;
        let base_dir = std::path::absolute(&config.server.directory)?;

        if !base_dir.exists() {
            return Err(ServerError::MissingDirectory(base_dir));
        }
        if !base_dir.is_dir() {
            return Err(ServerError::NotADirectory(base_dir));
        }

        let access_log_format = AccessLogFormat::parse(&config.logging.access_log_format);

        Ok(Self {
            config,
            base_dir,
            addr,
            access_log_format,
        })
    }

    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}

fn socket_addr(bind: &str, port: u16) -> Result<SocketAddr, ServerError> {
    // Tolerate the bracketed IPv6 form used in URLs
    let host = bind.trim_start_matches('[').trim_end_matches(']');
    let ip: IpAddr = host.parse().map_err(|source| ServerError::InvalidAddress {
        address: bind.to_string(),
        source,
    })?;
    Ok(SocketAddr::new(ip, port))
}

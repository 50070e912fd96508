//! Command-line arguments
//!
//! Flags are optional so that unset ones fall through to the config file,
//! the environment, and finally the built-in defaults.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "dirserve")]
#[command(about = "Serve a local directory tree over HTTP")]
#[command(version)]
pub struct Cli {
    /// Address to bind to [default: 0.0.0.0]
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port to listen on [default: 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Base directory to serve [default: current directory]
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Config file path (default: dirserve.toml if present)
    #[arg(short, long, env = "DIRSERVE_CONFIG")]
    pub config: Option<PathBuf>,
}

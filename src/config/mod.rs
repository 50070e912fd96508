// Configuration module entry point
// Layers defaults, config file, environment and command-line flags

mod state;
mod types;

pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig};

use crate::cli::Cli;

/// Config file looked up in the working directory when `--config` is absent
const DEFAULT_CONFIG_NAME: &str = "dirserve";

impl Config {
    /// Load configuration for the given command line
    ///
    /// Precedence, lowest first: built-in defaults, config file, `DIRSERVE_*`
    /// environment variables (`DIRSERVE_SERVER__PORT=9000`), command-line flags.
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let file = match &cli.config {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("DIRSERVE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.bind", cli.bind.clone())?
            .set_override_option("server.port", cli.port.map(i64::from))?
            .set_override_option(
                "server.directory",
                cli.directory
                    .as_ref()
                    .map(|d| d.to_string_lossy().into_owned()),
            )?
            .build()?;

        settings.try_deserialize()
    }
}

// Configuration module entry point
// Loads layered configuration and builds the runtime state shared by handlers

mod state;
mod types;

use std::net::SocketAddr;

use crate::error::StartupError;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LogLevel};

/// Default config file (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (extension optional)
    /// A missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name(config_path).required(false),
            environment(),
        )
    }

    /// Load configuration from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::from_str(toml, config::FileFormat::Toml),
            environment(),
        )
    }

    fn build<S>(source: S, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(source)
            .add_source(env)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("http.server_name", "portfolio/0.1")?
            .set_default("http.enable_cors", false)?
            .set_default("site.static_dir", "public")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, StartupError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|source| StartupError::InvalidAddress { addr, source })
    }
}

/// `PORTFOLIO_SECTION__KEY` variables, layered over the file
fn environment() -> config::Environment {
    config::Environment::with_prefix("PORTFOLIO")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

//! Startup error type
//!
//! Request handling never fails (`Result<_, Infallible>`); everything that
//! can go wrong happens before the first connection is accepted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("failed to open log file: {0}")]
    Logger(#[source] std::io::Error),

    #[error("failed to read body file '{path}': {source}")]
    BodyFile {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to build runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

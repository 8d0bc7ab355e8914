// Application state module
// Read-only state built once at startup and shared by all connections

use std::sync::Arc;

use super::types::Config;

/// Body fragment used when `site.body_file` is not configured
pub const DEFAULT_BODY: &str = r#"<main id="root"></main>"#;

/// Application state
///
/// The head metadata lives in `config.metadata`.
pub struct AppState {
    pub config: Config,
    /// HTML fragment rendered inside the document body
    pub body: Arc<str>,
}

impl AppState {
    /// Create `AppState` from configuration and a body fragment
    pub fn new(config: Config, body: impl Into<Arc<str>>) -> Self {
        Self {
            config,
            body: body.into(),
        }
    }

    /// Create `AppState`, reading the body fragment from `site.body_file` if set
    pub async fn load(config: Config) -> std::io::Result<Self> {
        let body = match config.site.body_file.as_deref() {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => DEFAULT_BODY.to_string(),
        };
        Ok(Self::new(config, body))
    }

    pub fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}

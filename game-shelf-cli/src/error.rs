use game_shelf_catalog::LoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] LoadError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No base URL configured; pass --base-url or set it in the config file")]
    NoBaseUrl,
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

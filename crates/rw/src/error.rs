//! CLI error types.

use rw_config::ConfigError;
use rw_doccomment::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid comment JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

use thiserror::Error;

use crate::config::ConfigError;
use crate::window::WebviewError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Webview(#[from] WebviewError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}


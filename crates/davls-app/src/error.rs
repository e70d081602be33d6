use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    RfcError(#[from] davls_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] davls_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

use thiserror::Error;

/// Errors raised while loading a multistatus body for parsing.
///
/// Parsing itself never fails; these cover the I/O around it.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;

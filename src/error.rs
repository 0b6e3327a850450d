use camino::Utf8PathBuf;
use thiserror::Error;

use zcl::error::ZclError;

#[derive(Error, Debug)]
pub enum InspectError {
    /* mapped errors */
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    FromHexError(#[from] hex::FromHexError),

    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),

    #[error(transparent)]
    SetLoggerError(#[from] log::SetLoggerError),

    #[error(transparent)]
    ZclError(#[from] ZclError),

    /* inspector errors */
    #[error("Invalid cluster id: {0:?}")]
    InvalidClusterId(String),

    #[error("Truncated {0} record")]
    Truncated(&'static str),

    #[error("Unknown data type {0:02x} for attribute {1:04x}")]
    UnknownDataType(u8, u16),

    #[error("Cannot step over value of type {0} in attribute {1:04x}")]
    UnsupportedValue(&'static str, u16),

    #[error("Config file not found: {0}")]
    ConfigNotFound(Utf8PathBuf),
}

pub type InspectResult<T> = Result<T, InspectError>;

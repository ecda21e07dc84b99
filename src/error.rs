use crate::decoder::error::DecodeError;
use crate::stations::error::StationDirectoryError;
use crate::transport::error::TransportError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DwdError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    DirectoryFormat(#[from] StationDirectoryError),

    #[error("Failed to decode line {line_number} of station '{station}'")]
    Decode {
        station: String,
        line_number: usize,
        #[source]
        source: DecodeError,
    },

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build observation frame")]
    Frame(#[from] PolarsError),
}

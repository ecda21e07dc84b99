use crate::types::field::Field;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    // The field table covers [0, 95), so only over-long lines end up here.
    #[error("Column {column} is outside the record layout (line length {line_length})")]
    ColumnOutOfRange { column: usize, line_length: usize },

    #[error("Line has {line_length} columns, at least {required} are needed for station and date")]
    LineTooShort { line_length: usize, required: usize },

    #[error("Invalid station id '{value}'")]
    InvalidStationId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid date '{value}', expected YYYYMMDD")]
    InvalidDate { value: String },

    #[error("Invalid number '{value}' in field {field}")]
    InvalidNumber {
        field: Field,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Unsupported spelling '{value}' of a non-finite number in field {field}")]
    NonFiniteSpelling { field: Field, value: String },
}

//! Defines the error types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The error type for parsing raw GDP records into a dataset.
///
/// A single malformed record rejects the whole dataset, so that
/// no record with an unknown date or value reaches the chart.
#[derive(Debug)]
pub enum ParseError {
    /// The date of the record at `index` does not match the `YYYY-MM-DD` format.
    Date {
        index: usize,
        input: String,
        error: chrono::ParseError,
    },

    /// The value of the record at `index` is not a finite number.
    Value { index: usize, input: String },

    /// The dataset has no records, either as received or after filtering.
    EmptyDataset,

    /// A [`serde_json::Error`] encountered while deserializing the raw payload.
    Json(serde_json::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parse_error = "record parse error:";

        match self {
            ParseError::Date {
                index,
                input,
                error,
            } => write!(
                f,
                "{parse_error} the date \"{input}\" of record {index} is not a YYYY-MM-DD date: {error}"
            ),
            ParseError::Value { index, input } => write!(
                f,
                "{parse_error} the value \"{input}\" of record {index} is not a finite number"
            ),
            ParseError::EmptyDataset => write!(f, "{parse_error} the dataset has no records"),
            ParseError::Json(error) => {
                write!(f, "{parse_error} JSON deserialization error: {error}")
            }
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Date { error, .. } => Some(error),
            ParseError::Value { .. } => None,
            ParseError::EmptyDataset => None,
            ParseError::Json(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        ParseError::Json(error)
    }
}

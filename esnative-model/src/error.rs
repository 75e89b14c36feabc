//! Error types raised by the native model

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No type match for [{0}]")]
    InvalidOpType(String),

    #[error("No search type for [{0}]")]
    InvalidSearchType(String),

    #[error("Failed to parse time value [{0}]")]
    InvalidTimeValue(String),
}

//! Error types returned by [`ReadingSeries`](crate::ReadingSeries) operations

use std::{io, num::ParseFloatError, path::PathBuf};

use thiserror::Error;

/// Returned when a statistic is requested from a series with no readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot compute the average of zero readings")]
pub struct EmptyInputError;

/// Returned when a serialized series cannot be read or parsed
#[derive(Debug, Error)]
pub enum MalformedInputError {
    /// The file could not be opened for reading
    #[error("could not open {} for reading", .path.display())]
    Open {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// The stream failed part way through reading
    #[error("could not read serialized series")]
    Read(#[source] io::Error),
    /// The stream is not valid UTF-8 text
    #[error("serialized series is not valid UTF-8")]
    NotUtf8,
    /// The label line is not terminated by a line break
    #[error("serialized series has no line break after the label")]
    MissingLabelLine,
    /// A token on the value line is not a number
    #[error("reading {position} is not a number: {token:?}")]
    InvalidValue {
        /// 1-based position of the token on the value line
        position: usize,
        /// The offending token, as it appeared in the input
        token: String,
        /// Parser failure
        #[source]
        source: ParseFloatError,
    },
    /// Something follows the value line
    #[error("unexpected content after the value line")]
    TrailingContent,
}

/// Returned when a series cannot be written to its target file
#[derive(Debug, Error)]
#[error("could not write {}", .path.display())]
pub struct ResourceUnavailableError {
    /// File that was requested
    pub path: PathBuf,
    /// Underlying I/O failure
    #[source]
    pub source: io::Error,
}

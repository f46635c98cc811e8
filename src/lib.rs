#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod error;
mod series;
mod text;

pub use error::{EmptyInputError, MalformedInputError, ResourceUnavailableError};
pub use series::{mean, ReadingSeries, DEFAULT_CAPACITY};

use snafu::Snafu;

pub use crate::errors::Error::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Runtime error: Are you sure your code runs inside #[tally::runtime]?
    RuntimeError,
    /// Invalid argument: {info}.
    InvalidArgument { info: String },
    /// Unknown error: {info}.
    Unknown { info: String },
}

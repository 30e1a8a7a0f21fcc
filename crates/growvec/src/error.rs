use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for sequence operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid capacity: {capacity}")]
    InvalidCapacity { capacity: isize },
}

//! Crate-wide error type.
//!
//! Lookups that miss are not errors: `get`/`remove` report absence through
//! `Option`/`bool`. `Error` only covers invalid construction and
//! fixed-capacity violations.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    #[error("container is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_name_the_offending_numbers() {
        assert_eq!(
            Error::ZeroCapacity.to_string(),
            "capacity must be greater than zero"
        );
        assert_eq!(
            Error::CapacityExceeded { capacity: 4 }.to_string(),
            "container is full (capacity 4)"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: 7, len: 3 }.to_string(),
            "index 7 out of bounds for length 3"
        );
    }
}

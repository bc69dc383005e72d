//! Error taxonomy shared by the whole crate.
//!
//! Every fallible operation returns [`Result`]. None of these errors are
//! recovered internally: each surfaces as a typed failure to the immediate
//! caller. Internal arena bookkeeping (dense ids, free positions) is checked
//! with plain asserts instead, since an out-of-range id is a programming
//! error, not an input error.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was outside the configured domain bound.
    #[error("value {value} is outside the domain [{min}, {max}]")]
    Domain { value: i64, min: i64, max: i64 },

    /// A cycle or permutation violated its canonical-form invariant.
    #[error("consistency check failed: {0}")]
    Consistency(&'static str),

    /// A key was inserted twice into a search tree.
    #[error("duplicate key {0} inserted into search tree")]
    DuplicateKey(i64),

    /// An unexpected token was met while parsing a bracket or integer stream.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A random draw was requested before the generator was seeded.
    #[error("random generator used before initialization")]
    UninitializedGenerator,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::Domain {
            value: 9,
            min: 1,
            max: 5,
        };
        assert_eq!(e.to_string(), "value 9 is outside the domain [1, 5]");

        let e = Error::DuplicateKey(3);
        assert_eq!(e.to_string(), "duplicate key 3 inserted into search tree");
    }
}

use thiserror::Error;

/// Two elements of the input could not be ordered against each other.
///
/// `left` and `right` are positions in the caller's slice. They are equal when a
/// single element is not comparable with itself, such as a `NaN`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid input: elements at positions {left} and {right} cannot be ordered")]
pub struct InvalidInputError {
    pub left: usize,
    pub right: usize,
}

impl InvalidInputError {
    pub(crate) fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

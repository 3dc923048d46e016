//! Pure comparison sorting.
//!
//! Every entry point borrows the input slice and returns a freshly allocated,
//! non-decreasing permutation of it. The caller's data is never touched.
//!
//! ```rust
//! let numbers = vec![42, 7, 13, 99, 1, 56];
//! let sorted = seqsort::sort(&numbers).unwrap();
//! assert_eq!(sorted, vec![1, 7, 13, 42, 56, 99]);
//! assert_eq!(numbers, vec![42, 7, 13, 99, 1, 56]);
//! ```
//!
//! Elements only need [`PartialOrd`]. Values that cannot be ordered against each
//! other (a `NaN`, or a string next to a number in an [`Element`] list) make the
//! whole call fail with [`InvalidInputError`]; nothing is cloned in that case.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

mod element;
mod error;
mod heap;
mod merge;

pub use element::Element;
pub use error::InvalidInputError;

/// A borrowed element tagged with its position in the caller's slice.
type Entry<'a, T> = (usize, &'a T);

/// Sorting algorithm selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Top-down merge sort. Stable, O(n log n), O(n) scratch space.
    #[default]
    Stable,
    /// Heapsort. Not stable, O(n log n) worst case, no scratch space.
    Unstable,
}

impl Algorithm {
    /// Returns the elements of `input` in non-decreasing order.
    pub fn sort<T: PartialOrd + Clone>(self, input: &[T]) -> Result<Vec<T>, InvalidInputError> {
        let result = entries(input).and_then(|mut entries| {
            match self {
                Self::Stable => merge::sort(&mut entries)?,
                Self::Unstable => heap::sort(&mut entries)?,
            }
            Ok(entries)
        });
        match result {
            Ok(entries) => Ok(entries.into_iter().map(|(_, value)| value.clone()).collect()),
            Err(err) => {
                log::trace!("{:?} sort rejected {} elements: {}", self, input.len(), err);
                Err(err)
            }
        }
    }

    pub fn is_stable(self) -> bool {
        self == Self::Stable
    }
}

/// Sorts `input` with the stable merge sort.
///
/// Equal elements keep their relative order from `input`.
pub fn sort<T: PartialOrd + Clone>(input: &[T]) -> Result<Vec<T>, InvalidInputError> {
    Algorithm::Stable.sort(input)
}

/// Sorts `input` with heapsort. Equal elements may be reordered.
pub fn sort_unstable<T: PartialOrd + Clone>(input: &[T]) -> Result<Vec<T>, InvalidInputError> {
    Algorithm::Unstable.sort(input)
}

/// Checks for non-decreasing order. Any unordered pair, such as a `NaN`, makes it `false`.
pub fn is_sorted<T: PartialOrd>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}

/// Method-call form of [`sort`] and [`sort_unstable`].
///
/// ```rust
/// use seqsort::SortExt;
///
/// let words = vec!["pear", "apple", "fig"];
/// assert_eq!(words.sorted().unwrap(), vec!["apple", "fig", "pear"]);
/// ```
pub trait SortExt<T> {
    fn sorted(&self) -> Result<Vec<T>, InvalidInputError>;

    fn sorted_unstable(&self) -> Result<Vec<T>, InvalidInputError>;
}

impl<T: PartialOrd + Clone> SortExt<T> for [T] {
    fn sorted(&self) -> Result<Vec<T>, InvalidInputError> {
        sort(self)
    }

    fn sorted_unstable(&self) -> Result<Vec<T>, InvalidInputError> {
        sort_unstable(self)
    }
}

/// Tags every element with its position, rejecting values that are not even
/// comparable with themselves (`NaN`).
fn entries<T: PartialOrd>(input: &[T]) -> Result<Vec<Entry<'_, T>>, InvalidInputError> {
    input
        .iter()
        .enumerate()
        .map(|(i, value)| match value.partial_cmp(value) {
            Some(_) => Ok((i, value)),
            None => Err(InvalidInputError::new(i, i)),
        })
        .collect()
}

/// `a <= b`, or an error naming both positions when they are unordered.
fn le<T: PartialOrd>(a: Entry<'_, T>, b: Entry<'_, T>) -> Result<bool, InvalidInputError> {
    match a.1.partial_cmp(b.1) {
        Some(ord) => Ok(ord != Ordering::Greater),
        None => Err(InvalidInputError::new(a.0, b.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_rejected_before_sorting() {
        let err = entries(&[1.0, f64::NAN, 0.5]).unwrap_err();
        assert_eq!(err, InvalidInputError::new(1, 1));
    }

    #[test]
    fn le_reports_positions() {
        let a = Element::Int(1);
        let b = Element::from("x");
        assert_eq!(le((3, &a), (7, &b)), Err(InvalidInputError::new(3, 7)));
        assert_eq!(le((0, &a), (1, &a)), Ok(true));
    }

    #[test]
    fn algorithm_names() {
        assert!(Algorithm::default().is_stable());
        assert!(!Algorithm::Unstable.is_stable());
        let json = serde_json::to_string(&Algorithm::Unstable).unwrap();
        assert_eq!(json, "\"unstable\"");
    }
}

//! Precondition checks shared by the algorithm crates.
//!
//! Each helper returns `Ok(())` when the precondition holds and the matching
//! [`Error`] variant otherwise, so callers can validate with `?` before
//! touching their inputs.

use crate::{Error, Result};

/// Check that a paired sequence has the same length as its partner.
///
/// `what` names the sequence being checked (e.g. `"weights"`).
///
/// # Examples
///
/// ```
/// use algokit_core::validate::same_len;
///
/// assert!(same_len("weights", 3, 3).is_ok());
/// assert!(same_len("weights", 3, 2).is_err());
/// ```
pub fn same_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Check that `index` addresses an element of a collection of length `len`.
pub fn index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Check that the inclusive range `start..=end` lies within `0..len`.
///
/// Bounds are checked before ordering, so an out-of-range `end` reports
/// `IndexOutOfRange` even when `end < start`.
///
/// # Examples
///
/// ```
/// use algokit_core::{validate::inclusive_range, Error};
///
/// assert!(inclusive_range(1, 3, 5).is_ok());
/// assert!(matches!(
///     inclusive_range(3, 1, 5),
///     Err(Error::InvalidRange { start: 3, end: 1 })
/// ));
/// ```
pub fn inclusive_range(start: usize, end: usize, len: usize) -> Result<()> {
    index(start, len)?;
    index(end, len)?;
    if end < start {
        return Err(Error::InvalidRange { start, end });
    }
    Ok(())
}

/// Check that a slice holds at least `min` elements.
pub fn min_len(what: &str, len: usize, min: usize) -> Result<()> {
    if len >= min {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "{what} must contain at least {min} elements, got {len}"
        )))
    }
}

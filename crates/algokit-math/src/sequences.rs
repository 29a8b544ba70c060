//! Integer sequences.
//!
//! Fibonacci numbers here start from `1, 1`, so `fibonacci(0) == 1` and
//! `fibonacci(5) == 8`.

use algokit_core::{Error, Result};

/// Iterator over the Fibonacci numbers `1, 1, 2, 3, 5, ...`.
///
/// Ends after the last value that fits in a `u128` instead of overflowing.
#[derive(Clone, Debug)]
pub struct Fibonacci {
    current: Option<u128>,
    next: Option<u128>,
}

impl Fibonacci {
    /// Starts the sequence at its first term.
    pub fn new() -> Self {
        Self {
            current: Some(1),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let value = self.current?;
        let following = self.next.and_then(|next| next.checked_add(value));
        self.current = self.next;
        self.next = following;
        Some(value)
    }
}

/// The `n`th Fibonacci number, counting from `fibonacci(0) == 1`.
///
/// Computed iteratively in O(n). Returns `Overflow` from `n = 186` on, where
/// the value no longer fits in a `u128`.
///
/// ```
/// use algokit_math::fibonacci;
///
/// let first: Vec<u128> = (0..8).map(|n| fibonacci(n).unwrap()).collect();
/// assert_eq!(first, vec![1, 1, 2, 3, 5, 8, 13, 21]);
/// ```
pub fn fibonacci(n: usize) -> Result<u128> {
    Fibonacci::new()
        .nth(n)
        .ok_or_else(|| Error::overflow("fibonacci"))
}

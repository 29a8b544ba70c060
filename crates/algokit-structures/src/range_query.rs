//! Range query tree (segment tree).
//!
//! Answers queries of the form "combine `values[i..=j]`" for any associative
//! combining function (sum, product, min, max, gcd, ...) in O(log n), and
//! supports point updates in O(log n).
//!
//! The tree is stored implicitly in a vector: node `k` has children `2k`
//! and `2k + 1`, and the leaves start at the first power of two that is at
//! least the number of values. Padding leaves hold no value, so the
//! combining function needs no identity element.

use algokit_core::{Result, validate};
use std::fmt;
use std::ops::{Add, Mul};

/// Function-pointer type used by the convenience constructors.
pub type Combine<T> = fn(&T, &T) -> T;

/// A segment tree over `T` with combining function `F`.
///
/// # Example
///
/// ```rust
/// use algokit_structures::RangeQueryTree;
///
/// // Sums over a range
/// let mut rqt = RangeQueryTree::sum(vec![6, 2, 4, 9]);
/// assert_eq!(rqt.query(0, 1).unwrap(), 8);
/// assert_eq!(rqt.query(2, 3).unwrap(), 13);
///
/// rqt.update(1, 10).unwrap();
/// assert_eq!(rqt.to_string(), "[6, 10, 4, 9]");
///
/// // Maximums over a range, with a closure
/// let rqt = RangeQueryTree::new(vec![6, 2, 4, 9], |a: &i32, b: &i32| *a.max(b));
/// assert_eq!(rqt.query(0, 1).unwrap(), 6);
/// assert_eq!(rqt.query(1, 3).unwrap(), 9);
/// ```
#[derive(Clone)]
pub struct RangeQueryTree<T, F> {
    /// Implicit binary tree; index 0 is unused.
    tree: Vec<Option<T>>,
    /// Index of the first leaf (a power of two).
    leaves: usize,
    /// Number of user-visible values.
    len: usize,
    op: F,
}

impl<T, F> RangeQueryTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Builds a tree over `values` combined with the associative `op`.
    pub fn new(values: Vec<T>, op: F) -> Self {
        let len = values.len();
        let leaves = len.max(1).next_power_of_two();
        let mut tree: Vec<Option<T>> = vec![None; 2 * leaves];

        for (offset, value) in values.into_iter().enumerate() {
            tree[leaves + offset] = Some(value);
        }

        let mut rqt = Self {
            tree,
            leaves,
            len,
            op,
        };
        for node in (1..leaves).rev() {
            rqt.tree[node] = rqt.combine_children(node);
        }

        log::trace!("built range query tree: {} values, {} leaves", len, leaves);
        rqt
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.tree[self.leaves + index].as_ref()
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.tree[self.leaves..self.leaves + self.len]
            .iter()
            .filter_map(Option::as_ref)
    }

    /// Replaces the value at `index` and recomputes its ancestors.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        validate::index(index, self.len)?;

        let mut node = self.leaves + index;
        self.tree[node] = Some(value);
        node /= 2;
        while node >= 1 {
            self.tree[node] = self.combine_children(node);
            node /= 2;
        }
        Ok(())
    }

    /// Combines the values in the inclusive range `start..=end`.
    ///
    /// Both indices must be within `0..len` and `start <= end`.
    pub fn query(&self, start: usize, end: usize) -> Result<T> {
        validate::inclusive_range(start, end, self.len)?;

        // The range is non-empty and in bounds, so it covers at least one leaf.
        let result = self.query_node(1, 0, self.leaves - 1, start, end);
        result.ok_or_else(|| algokit_core::Error::InvalidRange { start, end })
    }

    fn query_node(
        &self,
        node: usize,
        node_start: usize,
        node_end: usize,
        start: usize,
        end: usize,
    ) -> Option<T> {
        // Query range covers the whole node
        if start <= node_start && node_end <= end {
            return self.tree[node].clone();
        }
        // Disjoint
        if end < node_start || node_end < start {
            return None;
        }

        let mid = node_start + (node_end - node_start) / 2;
        let left = self.query_node(2 * node, node_start, mid, start, end);
        let right = self.query_node(2 * node + 1, mid + 1, node_end, start, end);
        self.merge(left.as_ref(), right.as_ref())
    }

    fn combine_children(&self, node: usize) -> Option<T> {
        self.merge(
            self.tree[2 * node].as_ref(),
            self.tree[2 * node + 1].as_ref(),
        )
    }

    fn merge(&self, left: Option<&T>, right: Option<&T>) -> Option<T> {
        match (left, right) {
            (Some(l), Some(r)) => Some((self.op)(l, r)),
            (Some(v), None) | (None, Some(v)) => Some(v.clone()),
            (None, None) => None,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl<T> RangeQueryTree<T, Combine<T>>
where
    T: Clone + Add<Output = T>,
{
    /// Range sums.
    pub fn sum(values: Vec<T>) -> Self {
        Self::new(values, add::<T>)
    }
}

impl<T> RangeQueryTree<T, Combine<T>>
where
    T: Clone + Mul<Output = T>,
{
    /// Range products.
    pub fn product(values: Vec<T>) -> Self {
        Self::new(values, mul::<T>)
    }
}

impl<T> RangeQueryTree<T, Combine<T>>
where
    T: Clone + Ord,
{
    /// Range minimums.
    pub fn min(values: Vec<T>) -> Self {
        Self::new(values, min::<T>)
    }

    /// Range maximums.
    pub fn max(values: Vec<T>) -> Self {
        Self::new(values, max::<T>)
    }
}

fn add<T: Clone + Add<Output = T>>(a: &T, b: &T) -> T {
    a.clone() + b.clone()
}

fn mul<T: Clone + Mul<Output = T>>(a: &T, b: &T) -> T {
    a.clone() * b.clone()
}

fn min<T: Clone + Ord>(a: &T, b: &T) -> T {
    std::cmp::min(a, b).clone()
}

fn max<T: Clone + Ord>(a: &T, b: &T) -> T {
    std::cmp::max(a, b).clone()
}

impl<T: fmt::Debug, F> fmt::Display for RangeQueryTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.tree[self.leaves..self.leaves + self.len]
            .iter()
            .filter_map(Option::as_ref);
        f.debug_list().entries(values).finish()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for RangeQueryTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeQueryTree")
            .field("len", &self.len)
            .field("leaves", &self.leaves)
            .field("values", &format_args!("{self}"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Knapsack problems solved by dynamic programming over capacities.
//!
//! Both variants run in O(W * n) time for capacity `W` and `n` items. When
//! no weights are given, each item weighs its value.

use algokit_core::{Error, Result, validate};
use serde::Serialize;

// ============================================================================
// Result types
// ============================================================================

/// An optimal 0/1 knapsack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Knapsack {
    /// Total value of the chosen items.
    pub value: u64,
    /// Indices of the chosen items, ascending.
    pub items: Vec<usize>,
}

impl Knapsack {
    fn empty() -> Self {
        Self {
            value: 0,
            items: Vec::new(),
        }
    }
}

/// An optimal unbounded knapsack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnboundedKnapsack {
    /// Total value of the chosen copies.
    pub value: u64,
    /// Number of copies taken of each item, indexed like the input.
    pub counts: Vec<usize>,
}

fn resolve_weights(values: &[u64], weights: Option<&[u64]>) -> Result<Vec<u64>> {
    match weights {
        Some(weights) => {
            validate::same_len("weights", values.len(), weights.len())?;
            Ok(weights.to_vec())
        }
        None => Ok(values.to_vec()),
    }
}

/// Largest number of DP table cells a knapsack will allocate.
///
/// The 0/1 variant needs `(items + 1) * (capacity + 1)` cells, the
/// unbounded one `capacity + 1`.
pub const MAX_TABLE_CELLS: usize = 1 << 24;

fn check_table(items: usize, capacity: usize) -> Result<()> {
    let cells = capacity
        .checked_add(1)
        .zip(items.checked_add(1))
        .and_then(|(columns, rows)| columns.checked_mul(rows));
    match cells {
        Some(cells) if cells <= MAX_TABLE_CELLS => Ok(()),
        _ => Err(Error::invalid_input(format!(
            "capacity {capacity} with {items} items exceeds the knapsack table limit {MAX_TABLE_CELLS}"
        ))),
    }
}

fn fits(weight: u64, capacity: usize) -> Option<usize> {
    usize::try_from(weight).ok().filter(|&w| w <= capacity)
}

// ============================================================================
// 0/1 knapsack
// ============================================================================

/// Choose items, each at most once, maximizing total value within
/// `capacity`.
///
/// Among equally valuable choices an item is left out rather than taken, so
/// earlier items win ties.
///
/// # Errors
///
/// - `LengthMismatch` if `weights` is given with a different length.
/// - `InvalidInput` if the table would exceed [`MAX_TABLE_CELLS`].
/// - `Overflow` if the total value exceeds `u64::MAX`.
///
/// # Example
///
/// ```rust
/// use algokit_dp::knapsack_without_repetition;
///
/// let best = knapsack_without_repetition(10, &[9, 16, 14, 30], Some(&[2, 4, 3, 6])).unwrap();
/// assert_eq!(best.value, 46);
/// assert_eq!(best.items, vec![1, 3]);
/// ```
pub fn knapsack_without_repetition(
    capacity: usize,
    values: &[u64],
    weights: Option<&[u64]>,
) -> Result<Knapsack> {
    let weights = resolve_weights(values, weights)?;
    if values.is_empty() {
        return Ok(Knapsack::empty());
    }

    let n = values.len();
    check_table(n, capacity)?;
    // table[i][w]: best value using the first i items within capacity w
    let mut table = vec![vec![0u64; capacity + 1]; n + 1];
    let mut taken = vec![vec![false; capacity + 1]; n + 1];

    for i in 1..=n {
        let (value, weight) = (values[i - 1], fits(weights[i - 1], capacity));
        for w in 0..=capacity {
            table[i][w] = table[i - 1][w];
            let Some(weight) = weight.filter(|&wt| wt <= w) else {
                continue;
            };
            let with_item = table[i - 1][w - weight]
                .checked_add(value)
                .ok_or_else(|| Error::overflow("knapsack value"))?;
            if with_item > table[i][w] {
                table[i][w] = with_item;
                taken[i][w] = true;
            }
        }
    }

    let mut items = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if taken[i][w] {
            items.push(i - 1);
            // taken implies the weight fits
            w -= fits(weights[i - 1], capacity).unwrap_or(0);
        }
    }
    items.reverse();

    log::debug!(
        "0/1 knapsack over {} items, capacity {}: value {}",
        n,
        capacity,
        table[n][capacity]
    );
    Ok(Knapsack {
        value: table[n][capacity],
        items,
    })
}

// ============================================================================
// Unbounded knapsack
// ============================================================================

/// Choose any number of copies of each item, maximizing total value within
/// `capacity`.
///
/// # Errors
///
/// - `LengthMismatch` if `weights` is given with a different length.
/// - `InvalidInput` if an item with positive value weighs nothing (the
///   value would be unbounded), or if `capacity + 1` exceeds
///   [`MAX_TABLE_CELLS`].
/// - `Overflow` if the total value exceeds `u64::MAX`.
///
/// ```rust
/// use algokit_dp::knapsack_with_repetition;
///
/// let best = knapsack_with_repetition(8, &[10, 40, 50, 70], Some(&[1, 3, 4, 5])).unwrap();
/// assert_eq!(best.value, 110);
/// assert_eq!(best.counts, vec![0, 1, 0, 1]);
/// ```
pub fn knapsack_with_repetition(
    capacity: usize,
    values: &[u64],
    weights: Option<&[u64]>,
) -> Result<UnboundedKnapsack> {
    let weights = resolve_weights(values, weights)?;
    if let Some(i) = (0..values.len()).find(|&i| weights[i] == 0 && values[i] > 0) {
        return Err(Error::invalid_input(format!(
            "item {i} has value {} but no weight",
            values[i]
        )));
    }

    check_table(0, capacity)?;

    // best[w]: best value within capacity w; choice[w]: last item added
    let mut best = vec![0u64; capacity + 1];
    let mut choice: Vec<Option<usize>> = vec![None; capacity + 1];

    for w in 1..=capacity {
        for (i, &value) in values.iter().enumerate() {
            let Some(weight) = fits(weights[i], w).filter(|&wt| wt > 0) else {
                continue;
            };
            let candidate = best[w - weight]
                .checked_add(value)
                .ok_or_else(|| Error::overflow("knapsack value"))?;
            if candidate > best[w] {
                best[w] = candidate;
                choice[w] = Some(i);
            }
        }
    }

    let mut counts = vec![0; values.len()];
    let mut w = capacity;
    while let Some(i) = choice[w] {
        counts[i] += 1;
        w -= fits(weights[i], w).unwrap_or(w);
    }

    Ok(UnboundedKnapsack {
        value: best[capacity],
        counts,
    })
}

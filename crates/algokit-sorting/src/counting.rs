//! Counting sort for small non-negative integers.

use algokit_core::{Error, Result};

/// Largest `max - min` span counting sort will allocate counters for.
pub const MAX_COUNTING_SPAN: u32 = 1 << 24;

/// Counting sort. O(n + k) for the value span `k = max - min + 1`.
///
/// Returns `InvalidInput` (leaving `values` untouched) when the span exceeds
/// [`MAX_COUNTING_SPAN`]; use a comparison sort for such inputs.
///
/// ```
/// use algokit_sorting::counting_sort;
///
/// let mut values = vec![5, 3, 9, 3, 0];
/// counting_sort(&mut values).unwrap();
/// assert_eq!(values, vec![0, 3, 3, 5, 9]);
/// ```
pub fn counting_sort(values: &mut [u32]) -> Result<()> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Ok(());
    };
    let span = max - min;
    if span > MAX_COUNTING_SPAN {
        return Err(Error::invalid_input(format!(
            "value span {span} exceeds the counting sort limit {MAX_COUNTING_SPAN}"
        )));
    }

    let mut counts = vec![0usize; span as usize + 1];
    for &value in values.iter() {
        counts[(value - min) as usize] += 1;
    }

    let mut slots = values.iter_mut();
    for (offset, &count) in counts.iter().enumerate() {
        for slot in slots.by_ref().take(count) {
            *slot = min + offset as u32;
        }
    }
    Ok(())
}

//! In-place comparison sorts.
//!
//! Every sort here leaves the slice in the same order as `slice::sort`;
//! `insertion_sort` and `merge_sort` are also stable.

use std::cmp::Ordering;

/// Whether `values` is in non-decreasing order.
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

// ============================================================================
// Insertion sort
// ============================================================================

/// Insertion sort. O(n²), but O(n) on nearly sorted input.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let mut j = i;
        while j > 0 && values[j - 1] > values[j] {
            values.swap(j - 1, j);
            j -= 1;
        }
    }
}

// ============================================================================
// Merge sort
// ============================================================================

/// Top-down merge sort with one scratch buffer. O(n log n), stable.
pub fn merge_sort<T: Ord + Clone>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }
    let mut scratch = values.to_vec();
    merge_sort_into(&mut scratch, values);
}

/// Sort `dst` using `src` (holding the same elements) as scratch space.
fn merge_sort_into<T: Ord + Clone>(src: &mut [T], dst: &mut [T]) {
    let len = dst.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    // Sort each half of `src` (with `dst` as scratch), then merge into `dst`.
    {
        let (src_left, src_right) = src.split_at_mut(mid);
        let (dst_left, dst_right) = dst.split_at_mut(mid);
        merge_sort_into(dst_left, src_left);
        merge_sort_into(dst_right, src_right);
    }
    merge(&src[..mid], &src[mid..], dst);
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // `<=` keeps equal elements in their original order.
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

// ============================================================================
// Quick sort
// ============================================================================

/// Quick sort with a median-of-three pivot and three-way partitioning.
/// O(n log n) expected, and linear on runs of equal values.
///
/// Recurses into the smaller side and loops on the larger one, so the stack
/// depth stays O(log n).
pub fn quick_sort<T: Ord>(values: &mut [T]) {
    let mut rest = values;
    while rest.len() > 1 {
        let current = std::mem::take(&mut rest);
        let (lt, gt) = partition(current);
        let (left, tail) = current.split_at_mut(lt);
        let right = &mut tail[gt - lt..];
        if left.len() < right.len() {
            quick_sort(left);
            rest = right;
        } else {
            quick_sort(right);
            rest = left;
        }
    }
}

/// Partition into `< pivot`, `== pivot` and `> pivot` blocks, returning the
/// bounds `(lt, gt)` of the middle block.
fn partition<T: Ord>(values: &mut [T]) -> (usize, usize) {
    let last = values.len() - 1;
    let mid = last / 2;
    if values[mid] < values[0] {
        values.swap(mid, 0);
    }
    if values[last] < values[0] {
        values.swap(last, 0);
    }
    if values[last] < values[mid] {
        values.swap(last, mid);
    }
    values.swap(0, mid);

    // values[..lt] < pivot, values[lt..i] == pivot, values[gt..] > pivot.
    // The pivot itself always sits at values[lt].
    let (mut lt, mut i, mut gt) = (0, 1, values.len());
    while i < gt {
        match values[i].cmp(&values[lt]) {
            Ordering::Less => {
                values.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                values.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

// ============================================================================
// Heap sort
// ============================================================================

/// Heap sort on an implicit binary max-heap. O(n log n), no extra memory.
pub fn heap_sort<T: Ord>(values: &mut [T]) {
    let len = values.len();
    for i in (0..len / 2).rev() {
        sift_down(values, i, len);
    }
    for end in (1..len).rev() {
        values.swap(0, end);
        sift_down(values, 0, end);
    }
}

fn sift_down<T: Ord>(values: &mut [T], mut root: usize, len: usize) {
    loop {
        let mut largest = root;
        let (left, right) = (2 * root + 1, 2 * root + 2);
        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        values.swap(root, largest);
        root = largest;
    }
}

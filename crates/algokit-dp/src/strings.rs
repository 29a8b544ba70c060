//! String alignment problems: common subsequences and substrings, edit
//! distance, and increasing subsequences.
//!
//! The string functions work on `char`s, not bytes, so multi-byte text is
//! handled correctly.

// ============================================================================
// Longest common subsequence
// ============================================================================

/// Longest common subsequence of `a` and `b` (not necessarily contiguous).
///
/// When dropping a character from either string gives an equally long
/// answer, the character of `a` is dropped. This fixes which of several
/// optimal answers is returned.
///
/// # Examples
///
/// ```
/// use algokit_dp::longest_common_subsequence;
///
/// assert_eq!(longest_common_subsequence("ABCDGH", "AEDFHR"), "ADH");
/// assert_eq!(longest_common_subsequence("AGGTAB", "GXTXAYB"), "GTAB");
/// assert_eq!(longest_common_subsequence("abc", ""), "");
/// ```
pub fn longest_common_subsequence(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    // len[i][j]: LCS length of a[..i] and b[..j]
    let mut len = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            len[i][j] = if a[i - 1] == b[j - 1] {
                len[i - 1][j - 1] + 1
            } else {
                len[i - 1][j].max(len[i][j - 1])
            };
        }
    }

    let mut answer = Vec::with_capacity(len[n][m]);
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            answer.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if len[i - 1][j] >= len[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    answer.iter().rev().collect()
}

// ============================================================================
// Longest common substring
// ============================================================================

/// Longest contiguous run shared by `a` and `b`.
///
/// Among equally long runs the one starting earliest in `a` is returned.
///
/// ```
/// use algokit_dp::longest_common_substring;
///
/// assert_eq!(longest_common_substring("xabcdey", "zzabcdq"), "abcd");
/// assert_eq!(longest_common_substring("abc", "def"), "");
/// ```
pub fn longest_common_substring(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Suffix-match lengths for the previous and current row of `a`.
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    let (mut best, mut end) = (0, 0);

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            current[j] = if a[i - 1] == b[j - 1] {
                previous[j - 1] + 1
            } else {
                0
            };
            if current[j] > best {
                best = current[j];
                end = i;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    a[end - best..end].iter().collect()
}

// ============================================================================
// Edit distance
// ============================================================================

/// Levenshtein distance: the fewest single-character insertions, deletions
/// and substitutions turning `a` into `b`.
///
/// Keeps two rows of the DP table, so memory is O(len(b)).
///
/// ```
/// use algokit_dp::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

// ============================================================================
// Longest increasing subsequence
// ============================================================================

/// A longest strictly increasing subsequence, in O(n log n) by patience
/// sorting.
///
/// `tails[k]` holds the index of the smallest value ending an increasing run
/// of length `k + 1`; predecessor links rebuild the run that ends at the
/// last tail.
///
/// ```
/// use algokit_dp::longest_increasing_subsequence;
///
/// assert_eq!(
///     longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]),
///     vec![2, 3, 7, 18]
/// );
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut tails: Vec<usize> = Vec::new();
    let mut predecessor: Vec<Option<usize>> = vec![None; values.len()];

    for (i, value) in values.iter().enumerate() {
        let pos = tails.partition_point(|&t| values[t] < *value);
        if pos > 0 {
            predecessor[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut run = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        run.push(values[i].clone());
        cursor = predecessor[i];
    }
    run.reverse();
    run
}

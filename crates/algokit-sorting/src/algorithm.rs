//! Runtime selection of a comparison sort.

use crate::comparison::{heap_sort, insertion_sort, merge_sort, quick_sort};
use algokit_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A comparison sort chosen at runtime, e.g. from a command-line flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// [`insertion_sort`]
    Insertion,
    /// [`merge_sort`]
    #[default]
    Merge,
    /// [`quick_sort`]
    Quick,
    /// [`heap_sort`]
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in a fixed order.
    pub const ALL: [SortAlgorithm; 4] = [Self::Insertion, Self::Merge, Self::Quick, Self::Heap];

    /// The algorithm's name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    /// Sorts `values` in place with this algorithm.
    pub fn sort<T: Ord + Clone>(self, values: &mut [T]) {
        log::debug!("{} sort of {} values", self.name(), values.len());
        match self {
            Self::Insertion => insertion_sort(values),
            Self::Merge => merge_sort(values),
            Self::Quick => quick_sort(values),
            Self::Heap => heap_sort(values),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| {
                Error::invalid_input(format!(
                    "unknown sort algorithm '{s}' (expected insertion, merge, quick or heap)"
                ))
            })
    }
}

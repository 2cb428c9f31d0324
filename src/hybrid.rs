//! Size-dispatched sort combining insertion, quick and merge sort.

use std::cmp::Ordering;

use crate::stable::{insertion, merge};
use crate::unstable::quick;

/// Largest input that is handed to insertion sort. Small slices are where
/// its low constant factors beat the O(n * log(n)) algorithms.
pub const DEFAULT_MAX_INSERTION_LEN: usize = 24;

/// Largest input that is handed to quicksort. Above this, merge sort's
/// guaranteed bound and stability are worth its O(n) scratch memory.
pub const DEFAULT_MAX_QUICKSORT_LEN: usize = 10_000;

/// Dispatch thresholds for [`sort_by_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Inputs with `len <= max_insertion_len` use insertion sort.
    pub max_insertion_len: usize,
    /// Inputs with `len <= max_quicksort_len` (and above the insertion
    /// threshold) use quicksort; larger ones use merge sort.
    pub max_quicksort_len: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_insertion_len: DEFAULT_MAX_INSERTION_LEN,
            max_quicksort_len: DEFAULT_MAX_QUICKSORT_LEN,
        }
    }
}

sort_impl!("hybrid_unstable");

/// Sorts `v`, choosing the algorithm by input size with the default
/// [`Thresholds`].
///
/// The mid band runs quicksort, so the combination as a whole does not
/// guarantee stability.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by_with(v, |a, b| a.cmp(b), Thresholds::default());
}

pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with(v, compare, Thresholds::default());
}

/// Like [`sort_by`] with explicit dispatch thresholds.
pub fn sort_by_with<T, F>(v: &mut [T], compare: F, thresholds: Thresholds)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    if len <= thresholds.max_insertion_len {
        insertion::sort_by(v, compare);
    } else if len <= thresholds.max_quicksort_len {
        quick::sort_by(v, compare);
    } else {
        merge::sort_by(v, compare);
    }
}

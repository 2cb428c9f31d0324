//! Classic in-memory sorting and order-statistic selection over slices.
//!
//! Every comparison-based algorithm lives in its own module with the same pair
//! of entry points, `sort` for `T: Ord` and `sort_by` for a caller-provided
//! comparator, so the implementations stay interchangeable. Modules are
//! grouped by whether they preserve the relative order of equal elements
//! ([`stable`]) or not ([`unstable`]). The non-comparison integer sorts are in
//! [`integer`], the k-th smallest selection in [`select`], and the
//! size-dispatched combination of insertion/quick/merge in [`hybrid`].

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        /// Adapter to `sort_test_tools::Sort` so the generic test suite and
        /// benchmarks can drive this implementation.
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod hybrid;
pub mod integer;
pub mod select;
pub mod stable;
pub mod unstable;

pub use error::SortError;
pub use integer::{counting_sort, radix_sort};
pub use select::{select, select_by, select_by_with_rng};

/// Returns true if `v` is in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, |a, b| a.cmp(b))
}

/// Returns true if for every adjacent pair `compare(v[i + 1], v[i])` is not
/// `Less`, i.e. `v` is non-decreasing under `compare`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    for w in v.windows(2) {
        if compare(&w[1], &w[0]) == Ordering::Less {
            return false;
        }
    }

    true
}

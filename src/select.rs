//! Order-statistic selection without fully sorting.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::SortError;
use crate::unstable::quick::{median_of_three_pivot, partition};

/// Returns the `k`-th smallest element of `v`. `k` is 1-indexed: `k == 1` is
/// the minimum and `k == len` the maximum.
///
/// `Err(SortError::RankOutOfRange)` if `k` is outside `[1, len]`, which also
/// covers the empty slice. On success `v` has been partially partitioned so
/// the returned element sits at index `k - 1`, everything before it is not
/// greater and everything after it is not smaller.
///
/// Average Theta(n); worst case Theta(n^2) against adversarial input, the
/// same weakness as quicksort and with the same mitigation available through
/// [`select_by_with_rng`]. Runs iteratively, so O(1) auxiliary space.
pub fn select<T>(v: &mut [T], k: usize) -> Result<&T, SortError>
where
    T: Ord,
{
    select_by(v, k, |a, b| a.cmp(b))
}

/// Like [`select`] with a caller-provided comparator.
pub fn select_by<T, F>(v: &mut [T], k: usize, mut compare: F) -> Result<&T, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    select_loop(v, k, &mut is_less, &mut median_of_three_pivot)
}

/// Like [`select_by`], but picks pivots uniformly at random from the
/// caller-provided generator; a seeded `StdRng` keeps runs reproducible.
pub fn select_by_with_rng<'a, T, F, R>(
    v: &'a mut [T],
    k: usize,
    mut compare: F,
    rng: &mut R,
) -> Result<&'a T, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    select_loop(v, k, &mut is_less, &mut |w: &[T], _is_less: &mut _| {
        rng.gen_range(0..w.len())
    })
}

fn select_loop<'a, T, F, P>(
    v: &'a mut [T],
    k: usize,
    is_less: &mut F,
    pivot_fn: &mut P,
) -> Result<&'a T, SortError>
where
    F: FnMut(&T, &T) -> bool,
    P: FnMut(&[T], &mut F) -> usize,
{
    let len = v.len();
    if k == 0 || k > len {
        return Err(SortError::RankOutOfRange { k, len });
    }

    // 0-indexed position the caller asked for.
    let target = k - 1;

    let mut lo = 0;
    let mut hi = len;
    loop {
        let window = &mut v[lo..hi];
        if window.len() < 2 {
            break;
        }

        let pivot_pos = pivot_fn(window, is_less);
        let mid = lo + partition(window, pivot_pos, is_less);

        // The pivot landed on its final sorted position. Keep only the half
        // that contains the target; the window shrinks every round.
        match mid.cmp(&target) {
            Ordering::Equal => break,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    Ok(&v[target])
}

use std::cmp::Ordering;

use rand::Rng;

sort_impl!("quick_unstable");

/// Sorts `v` with quicksort.
///
/// Pivots are chosen as the median of the first, middle and last element,
/// which defuses the classic already-sorted worst case. The recursion always
/// descends into the smaller partition and iterates on the larger one, so the
/// stack depth is O(log(n)) even when an adversarial input degrades the
/// running time to its Theta(n^2) worst case (average is Theta(n * log(n))).
/// Not stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b), &mut median_of_three_pivot);
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(
        v,
        &mut |a, b| compare(a, b) == Ordering::Less,
        &mut median_of_three_pivot,
    );
}

/// Like [`sort_by`], but chooses pivots uniformly at random from the
/// caller-provided generator instead of by median-of-three.
///
/// The generator is injected rather than drawn from a global source, so a
/// seeded `StdRng` gives reproducible runs.
pub fn sort_by_with_rng<T, F, R>(v: &mut [T], mut compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    quicksort(v, &mut is_less, &mut |w, _is_less: &mut _| {
        rng.gen_range(0..w.len())
    });
}

fn quicksort<'a, T, F, P>(mut v: &'a mut [T], is_less: &mut F, pivot_fn: &mut P)
where
    F: FnMut(&T, &T) -> bool,
    P: FnMut(&[T], &mut F) -> usize,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let pivot_pos = pivot_fn(v, is_less);
        let mid = partition(v, pivot_pos, is_less);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is
        // already at its final sorted position.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the smaller side and iterate on the larger one, which
        // bounds the stack depth to O(log(n)) regardless of pivot quality.
        if left.len() < right.len() {
            quicksort(left, is_less, pivot_fn);
            v = right;
        } else {
            quicksort(right, is_less, pivot_fn);
            v = left;
        }
    }
}

/// Partitions `v` around the element at `pivot_pos` and returns the pivot's
/// final sorted position.
///
/// Lomuto scheme: the pivot is swapped to the last slot, then a single scan
/// moves every element with `!is_less(pivot, elem)` (i.e. `elem <= pivot`)
/// behind an advancing store boundary, and finally the pivot is swapped into
/// the boundary slot. Shared with quickselect.
pub(crate) fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(pivot_pos < len);

    let last = len - 1;
    v.swap(pivot_pos, last);

    let mut store = 0;
    for scan in 0..last {
        if !is_less(&v[last], &v[scan]) {
            v.swap(store, scan);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}

/// Returns the index of the median of the first, middle and last element.
pub(crate) fn median_of_three_pivot<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    if len < 3 {
        return len - 1;
    }

    median_idx(v, is_less, 0, len / 2, len - 1)
}

/// Returns the index pointing to the median of the 3 elements `v[a]`, `v[b]`
/// and `v[c]`.
fn median_idx<T, F>(v: &[T], is_less: &mut F, mut a: usize, b: usize, mut c: usize) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[c], &v[a]) {
        std::mem::swap(&mut a, &mut c);
    }
    if is_less(&v[c], &v[b]) {
        return c;
    }
    if is_less(&v[b], &v[a]) {
        return a;
    }
    b
}

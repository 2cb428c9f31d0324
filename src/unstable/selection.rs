use std::cmp::Ordering;

sort_impl!("selection_unstable");

/// Sorts `v` with selection sort.
///
/// For each position scans the remaining suffix for its minimum and swaps it
/// into place. Always Theta(n^2) comparisons, not adaptive, and the long swap
/// can carry an element past an equal one, so not stable. O(1) auxiliary
/// space and at most n - 1 moves, which is its one redeeming quality.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min_idx = i;
        for j in i + 1..len {
            if is_less(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }

        if min_idx != i {
            v.swap(i, min_idx);
        }
    }
}

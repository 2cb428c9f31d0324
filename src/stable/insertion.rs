use std::cmp::Ordering;

sort_impl!("insertion_stable");

/// Sorts `v` with insertion sort.
///
/// Maintains a sorted prefix and moves each subsequent element left past
/// larger prefix elements to its insertion point. Adaptive: O(n) on nearly
/// sorted input, O(n^2) worst case. O(1) auxiliary space, stable. Also the
/// small-input branch of the hybrid dispatcher.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Shift v[i] left until its predecessor is not greater. Equal
        // elements never swap past each other, which keeps this stable.
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

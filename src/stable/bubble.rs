use std::cmp::Ordering;

sort_impl!("bubble_stable");

/// Sorts `v` with bubble sort.
///
/// Adjacent-pair passes with early termination once a pass performs no swap,
/// which makes the best case O(n) on already sorted input. O(n^2) worst and
/// average case, O(1) auxiliary space, stable.
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // After each pass the largest scanned element has bubbled to `end`, so
    // the scanned prefix shrinks. The pass count is bounded even if `is_less`
    // is not a total order.
    for end in (1..len).rev() {
        let mut swapped = false;

        for j in 0..end {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            return;
        }
    }
}

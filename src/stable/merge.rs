use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("merge_stable");

/// Sorts `v` with top-down merge sort.
///
/// Theta(n * log(n)) comparisons in the best, average and worst case. Uses a
/// single scratch buffer of `len / 2` elements that is allocated once and
/// reused across all merge levels. On ties the left run is consumed first,
/// which makes the sort stable. Recursion depth is O(log(n)).
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types.
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    // Shortest run that is merged at any level is at most `len / 2` elements,
    // so one buffer of that capacity serves every merge. The elements are
    // moved through it raw; its length stays zero.
    let mut buf = Vec::with_capacity(len / 2);
    let buf_ptr = buf.as_mut_ptr();

    merge_sort_rec(v, buf_ptr, is_less);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        merge_sort_rec(left, buf, is_less);
        merge_sort_rec(right, buf, is_less);
    }

    // SAFETY: `v` is non-empty on both sides of `mid`, `buf` has capacity for
    // the shorter run (`min(mid, len - mid) <= len / 2`), and T is not a ZST
    // (checked in `merge_sort`).
    unsafe {
        merge(v, mid, buf, is_less);
    }
}

/// Merges the two sorted runs `v[..mid]` and `v[mid..]` using `buf` as
/// temporary storage.
///
/// The two runs must be non-empty and `mid` must be in bounds. Buffer `buf`
/// must be long enough to hold a copy of the shorter run. Also, `T` must not
/// be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let arr_ptr = v.as_mut_ptr();
    let (v_mid, v_end) = unsafe { (arr_ptr.add(mid), arr_ptr.add(len)) };

    // The merge process first copies the shorter run into `buf`. Then it
    // traces the newly copied run and the longer run forwards (or backwards),
    // comparing their next unconsumed elements and copying the lesser (or
    // greater) one into `v`.
    //
    // As soon as the shorter run is fully consumed, the process is done. If
    // the longer run gets consumed first, then we must copy whatever is left
    // of the shorter run into the remaining hole in `v`.
    //
    // Intermediate state of the process is always tracked by `hole`, which
    // serves two purposes:
    // 1. Protects integrity of `v` from panics in `is_less`.
    // 2. Fills the remaining hole in `v` if the longer run gets consumed
    //    first.
    //
    // Panic safety:
    //
    // If `is_less` panics at any point during the process, `hole` will get
    // dropped and fill the hole in `v` with the unconsumed range in `buf`,
    // thus ensuring that `v` still holds every object it initially held
    // exactly once.
    let mut hole;

    if mid <= len - mid {
        // The left run is shorter.
        unsafe {
            ptr::copy_nonoverlapping(arr_ptr, buf, mid);
            hole = MergeHole {
                start: buf,
                end: buf.add(mid),
                dest: arr_ptr,
            };
        }

        // Initially, these pointers point to the beginnings of their arrays.
        let left = &mut hole.start;
        let mut right = v_mid;
        let out = &mut hole.dest;

        while *left < hole.end && right < v_end {
            // Consume the lesser side.
            // If equal, prefer the left run to maintain stability.
            unsafe {
                let to_copy = if is_less(&*right, &**left) {
                    get_and_increment(&mut right)
                } else {
                    get_and_increment(left)
                };
                ptr::copy_nonoverlapping(to_copy, get_and_increment(out), 1);
            }
        }
    } else {
        // The right run is shorter.
        unsafe {
            ptr::copy_nonoverlapping(v_mid, buf, len - mid);
            hole = MergeHole {
                start: buf,
                end: buf.add(len - mid),
                dest: v_mid,
            };
        }

        // Initially, these pointers point past the ends of their arrays.
        let left = &mut hole.dest;
        let right = &mut hole.end;
        let mut out = v_end;

        while arr_ptr < *left && buf < *right {
            // Consume the greater side.
            // If equal, prefer the right run to maintain stability.
            unsafe {
                let to_copy = if is_less(&*right.offset(-1), &*left.offset(-1)) {
                    decrement_and_get(left)
                } else {
                    decrement_and_get(right)
                };
                ptr::copy_nonoverlapping(to_copy, decrement_and_get(&mut out), 1);
            }
        }
    }
    // Finally, `hole` gets dropped. If the shorter run was not fully
    // consumed, whatever remains of it will now be copied into the hole in
    // `v`.

    unsafe fn get_and_increment<T>(ptr: &mut *mut T) -> *mut T {
        let old = *ptr;
        *ptr = unsafe { ptr.offset(1) };
        old
    }

    unsafe fn decrement_and_get<T>(ptr: &mut *mut T) -> *mut T {
        *ptr = unsafe { ptr.offset(-1) };
        *ptr
    }

    // When dropped, copies the range `start..end` into `dest..`.
    struct MergeHole<T> {
        start: *mut T,
        end: *mut T,
        dest: *mut T,
    }

    impl<T> Drop for MergeHole<T> {
        fn drop(&mut self) {
            // `T` is not a zero-sized type, and these are pointers into a
            // slice's elements.
            unsafe {
                let len = self.end.offset_from(self.start) as usize;
                ptr::copy_nonoverlapping(self.start, self.dest, len);
            }
        }
    }
}

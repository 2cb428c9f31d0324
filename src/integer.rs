//! Linear-time sorts for bounded non-negative integer keys.
//!
//! These do not use the comparator abstraction at all; they trade generality
//! for Theta(n + M) / Theta(d * (n + 10)) running time on a restricted
//! domain. Inputs are validated before anything is mutated, so an `Err`
//! leaves the slice untouched.

use crate::error::SortError;

const RADIX: usize = 10;

/// Sorts `v` with counting sort. All values must be in `[0, max_value]`.
///
/// Builds a frequency table of `max_value + 1` counts and rewrites `v` by
/// walking the table in key order. Theta(n + M) time and space for
/// `M = max_value`. Equal integers are indistinguishable by value, so the
/// per-value emit order is trivially order-preserving; a keyed variant would
/// need suffix-sum placement to stay stable.
pub fn counting_sort(v: &mut [i32], max_value: i32) -> Result<(), SortError> {
    if v.is_empty() {
        return Ok(());
    }

    if max_value < 0 {
        return Err(SortError::NegativeValue { value: max_value });
    }

    for &value in v.iter() {
        if value < 0 {
            return Err(SortError::NegativeValue { value });
        }
        if value > max_value {
            return Err(SortError::ValueAboveMax { value, max_value });
        }
    }

    let mut counts = vec![0usize; max_value as usize + 1];
    for &value in v.iter() {
        counts[value as usize] += 1;
    }

    let mut out = 0;
    for (key, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        v[out..out + count].fill(key as i32);
        out += count;
    }

    Ok(())
}

/// Sorts `v` with least-significant-digit radix sort, base 10.
///
/// Runs one stable counting pass per decimal digit of the maximum value,
/// `exp = 1, 10, 100, ...` while `max / exp > 0`. Stability of every digit
/// pass is what makes the final order correct. Theta(d * (n + 10)) time with
/// one scratch buffer of `n` elements reused across passes.
pub fn radix_sort(v: &mut [i32]) -> Result<(), SortError> {
    if v.is_empty() {
        return Ok(());
    }

    let mut max = 0;
    for &value in v.iter() {
        if value < 0 {
            return Err(SortError::NegativeValue { value });
        }
        max = max.max(value);
    }

    let mut scratch = vec![0i32; v.len()];

    // `exp` is widened to i64: after the top decimal digit of i32::MAX the
    // loop condition needs one more `exp * 10` that would overflow i32.
    let mut exp: i64 = 1;
    while (max as i64) / exp > 0 {
        counting_sort_by_digit(v, &mut scratch, exp);
        exp *= 10;
    }

    Ok(())
}

/// One stable counting-sort pass keyed on the decimal digit selected by
/// `exp`.
fn counting_sort_by_digit(v: &mut [i32], scratch: &mut [i32], exp: i64) {
    let digit_of = |value: i32| -> usize { ((value as i64 / exp) % RADIX as i64) as usize };

    let mut counts = [0usize; RADIX];
    for &value in v.iter() {
        counts[digit_of(value)] += 1;
    }

    // Turn the counts into cumulative end positions per digit.
    for digit in 1..RADIX {
        counts[digit] += counts[digit - 1];
    }

    // Walk the input back to front so equal digits keep their relative
    // order; this is what makes the pass stable.
    for &value in v.iter().rev() {
        let digit = digit_of(value);
        counts[digit] -= 1;
        scratch[counts[digit]] = value;
    }

    v.copy_from_slice(scratch);
}

//! Error type for domain precondition violations.
//!
//! Comparison-based sorts have no failure mode: empty and single-element
//! slices return immediately and comparator well-formedness is an unchecked
//! caller precondition. Errors only arise from the integer sorts' value
//! domain and from selection's rank argument.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Invalid-argument errors reported by [`crate::select`] and
/// [`crate::integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Selection rank `k` is 1-indexed and must be in `[1, len]`.
    RankOutOfRange {
        /// The rank requested.
        k: usize,
        /// Length of the input slice.
        len: usize,
    },

    /// The integer sorts only accept non-negative values.
    NegativeValue {
        /// The offending value.
        value: i32,
    },

    /// Counting sort found a value above the declared maximum.
    ValueAboveMax {
        /// The offending value.
        value: i32,
        /// The declared maximum key.
        max_value: i32,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::RankOutOfRange { k, len } => {
                write!(f, "Rank out of range: k = {k} (must be in [1, {len}])")
            }
            Self::NegativeValue { value } => {
                write!(f, "Negative value: {value} (integer sorts require non-negative values)")
            }
            Self::ValueAboveMax { value, max_value } => {
                write!(f, "Value above maximum: {value} (declared max_value {max_value})")
            }
        }
    }
}

impl Error for SortError {}

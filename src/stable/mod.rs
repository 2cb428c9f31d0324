//! Comparison sorts that preserve the relative order of equal elements.

pub mod bubble;
pub mod insertion;
pub mod merge;

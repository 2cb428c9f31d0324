//! Comparison sorts that may reorder equal elements.

pub mod heap;
pub mod quick;
pub mod selection;

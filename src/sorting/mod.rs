//! Row ordering.
//!
//! [`compare_values`] orders two values for a single key; [`sort_indices`]
//! composes keys into a stable multi-key sort in sort-list order.

mod comparator;
mod multi;

pub use comparator::{compare_values, locale_compare};
pub use multi::{compare_rows, sort_indices, SortKey};

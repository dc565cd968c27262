//! Row filtering.
//!
//! A row is kept when it matches the global search (if any) and every
//! per-column filter entry. Filter values that are null or empty never
//! exclude rows.

mod debounce;
mod evaluator;
mod global;

pub use debounce::GlobalFilterDebouncer;
pub use evaluator::{evaluate, is_inactive, matches_entry};
pub use global::{GlobalSearch, SearchScope};

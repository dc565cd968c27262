//! Derived view computation.
//!
//! [`compute_view`] is a pure function of the table state; the store caches
//! its result until the next effective action.

mod derived;
mod pagination;

pub use derived::{compute_view, BreakpointFlags, DerivedView, SelectionSummary, TableView};
pub use pagination::{page_bounds, page_numbers, total_pages, PageItem, PaginationInfo};

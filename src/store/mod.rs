//! Table State Store.
//!
//! [`TableStore`] owns one table's [`TableState`] and applies every mutation
//! through the pure [`reduce`] function. Each store is an ordinary value, so
//! any number of tables can coexist in one process.
//!
//! ```rust,ignore
//! use gridstate::model::{ColumnDef, Row, SortDirection};
//! use gridstate::store::TableStore;
//!
//! let mut store = TableStore::builder()
//!     .data(rows)
//!     .column(ColumnDef::new("name").header("Name"))
//!     .build()?;
//! store.set_sorting("name", Some(SortDirection::Asc));
//! for row in store.view().page_rows() {
//!     println!("{}", row.value("name"));
//! }
//! ```

mod action;
mod events;
mod reducer;
mod state;
mod table_store;

pub use action::TableAction;
pub use events::{Listener, ListenerId, TableEvent};
pub use reducer::{reduce, ReduceContext};
pub use state::{DrawerContent, ErrorValue, MobileDrawer, TableState};
pub use table_store::{TableStore, TableStoreBuilder};

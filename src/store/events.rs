//! Change notifications and the listener registry.

use super::state::TableState;
use crate::model::{Breakpoint, RowId, SortEntry};
use std::fmt;

/// What an effective action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    DataChanged { rows: usize },
    LoadingChanged(bool),
    ErrorChanged,
    SortingChanged(Vec<SortEntry>),
    FiltersChanged,
    GlobalFilterChanged(String),
    PageChanged { page: usize, page_size: usize },
    SelectionChanged { selected: Vec<RowId> },
    ExpansionChanged { expanded: Vec<RowId> },
    ColumnReordered {
        source_id: String,
        target_id: String,
        source_index: usize,
        target_index: usize,
    },
    ColumnResized {
        column_id: String,
        width: u32,
        previous_width: u32,
    },
    ColumnVisibilityChanged { column_id: String, visible: bool },
    ColumnsReset,
    /// Dragging/resizing/active-filter markers, drawer or viewport width
    UiChanged,
    BreakpointChanged(Breakpoint),
    Reset,
}

/// Handle returned by [`TableStore::subscribe`](super::TableStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with each event and the state after the action.
pub type Listener = Box<dyn FnMut(&TableEvent, &TableState) + Send>;

/// Ordered set of listeners.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    pub(crate) fn add(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove and drop a listener. Returns whether it was registered.
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn notify(&mut self, events: &[TableEvent], state: &TableState) {
        for (_, listener) in &mut self.listeners {
            for event in events {
                listener(event, state);
            }
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

//! List container view-state.
//!
//! Owns the column configuration, the raw rows, per-row expansion state, the
//! optional sort/filter specs, and the cached breakpoint set for the current
//! measured width. Rendering widgets read from here; event handlers mutate
//! through the methods below.

use super::breakpoints::BreakpointSet;
use super::row_view::RowViewState;
use crate::model::{derive_view, ColumnSpec, FilterSpec, Row, RowId, SortSpec};
use std::collections::HashMap;
use tracing::debug;

/// View-state for the whole table.
///
/// # Expansion state
/// Expansion is keyed by [`RowId`], never by list position: sorting,
/// filtering, and appends re-derive the visible sequence, and a row keeps its
/// expanded/collapsed state as long as its id survives.
///
/// # Measurement
/// `set_measured_width` is the resize entry point. It short-circuits when the
/// width is unchanged, so resize event storms never trigger spurious
/// recomputation. Observable through [`layout_generation`].
///
/// [`layout_generation`]: TableViewState::layout_generation
#[derive(Debug, Clone)]
pub struct TableViewState {
    /// Immutable column configuration, declaration order.
    columns: Vec<ColumnSpec>,
    /// Raw rows as supplied by the data source.
    rows: Vec<Row>,
    /// Per-row presentation state, keyed by stable id.
    /// Absent means collapsed (the default).
    view_states: HashMap<RowId, RowViewState>,
    /// Externally controlled sort spec.
    sort: Option<SortSpec>,
    /// Externally controlled filter spec.
    filter: Option<FilterSpec>,
    /// Width already claimed by fixed chrome (side panel), in cells.
    /// Folded into every breakpoint threshold.
    offset: u16,
    /// Total measured width, in terminal cells. Breakpoint thresholds are
    /// compared against this.
    measured_width: u16,
    /// Breakpoints for the current column set and offset.
    breakpoints: BreakpointSet,
    /// Bumped every time breakpoints are recomputed.
    layout_generation: u64,
}

impl TableViewState {
    /// Create the container from its immutable column configuration and the
    /// width of any fixed chrome (0 in designs without a side panel).
    ///
    /// The initial measured width is zero; callers feed a real measurement
    /// before the first render.
    pub fn new(columns: Vec<ColumnSpec>, offset: u16) -> Self {
        let breakpoints = BreakpointSet::compute(&columns, offset);
        Self {
            columns,
            rows: Vec::new(),
            view_states: HashMap::new(),
            sort: None,
            filter: None,
            offset,
            measured_width: 0,
            breakpoints,
            layout_generation: 0,
        }
    }

    /// Width claimed by fixed chrome.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// The column configuration, declaration order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The raw (underived) rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current breakpoint set.
    pub fn breakpoints(&self) -> &BreakpointSet {
        &self.breakpoints
    }

    /// Total measured width.
    pub fn measured_width(&self) -> u16 {
        self.measured_width
    }

    /// Counter bumped on every breakpoint recomputation.
    ///
    /// Lets callers (and tests) verify that re-measuring with an unchanged
    /// width performs no re-derivation.
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    /// Feed a new width measurement.
    ///
    /// Recomputes breakpoints only when the width actually changed; an
    /// unchanged measurement is a no-op. Returns whether a recomputation
    /// happened.
    pub fn set_measured_width(&mut self, width: u16) -> bool {
        if width == self.measured_width && self.layout_generation > 0 {
            return false;
        }
        self.measured_width = width;
        self.breakpoints = BreakpointSet::compute(&self.columns, self.offset);
        self.layout_generation += 1;
        debug!(width, generation = self.layout_generation, "breakpoints recomputed");
        true
    }

    /// Replace the full row sequence.
    ///
    /// Expansion state is preserved for rows whose id survives the
    /// replacement; state for vanished ids is dropped.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        let live: std::collections::HashSet<RowId> = self.rows.iter().map(Row::id).collect();
        self.view_states.retain(|id, _| live.contains(id));
    }

    /// Append rows to the end of the sequence.
    ///
    /// Existing rows keep their expansion state untouched; row identity is
    /// the id field, not the array position.
    pub fn append_rows(&mut self, rows: Vec<Row>) {
        self.rows.extend(rows);
    }

    /// Set or clear the sort spec.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Set or clear the filter spec.
    pub fn set_filter(&mut self, filter: Option<FilterSpec>) {
        self.filter = filter;
    }

    /// Current sort spec.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Current filter spec.
    pub fn filter(&self) -> Option<&FilterSpec> {
        self.filter.as_ref()
    }

    /// Derive the visible row sequence (filter, then stable sort).
    ///
    /// Pure recomputation from the raw rows on every call; nothing is cached
    /// or mutated.
    pub fn visible_rows(&self) -> Vec<Row> {
        derive_view(&self.rows, self.sort.as_ref(), self.filter.as_ref())
    }

    /// Presentation state for a row. Rows never seen before are collapsed.
    pub fn view_state(&self, id: RowId) -> RowViewState {
        self.view_states.get(&id).copied().unwrap_or_default()
    }

    /// Whether a row is currently expanded.
    pub fn is_expanded(&self, id: RowId) -> bool {
        self.view_state(id).is_expanded()
    }

    /// Toggle a row between collapsed and expanded.
    ///
    /// Unconditional flip; returns the new state. Toggling an id that is not
    /// in the current row set still records state. It applies if a row with
    /// that id appears later, which matches keying purely by identity.
    pub fn toggle_expanded(&mut self, id: RowId) -> RowViewState {
        let next = self.view_state(id).toggled();
        self.view_states.insert(id, next);
        next
    }
}

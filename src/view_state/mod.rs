//! View-state layer - width allocation and per-row presentation state
//!
//! This module implements the pure view-state for the responsive table:
//! breakpoint computation, the per-row collapse/expand state machine, and the
//! list container tying columns, rows, sort/filter, and measurement together.
//! Nothing here renders; the `view` layer reads from these types.
//!
//! # Module Structure
//!
//! - `breakpoints`: width allocator producing per-column visibility thresholds
//! - `row_view`: RowViewState - the collapsed/expanded state machine
//! - `table`: TableViewState - list container view-state

pub mod breakpoints;
pub mod row_view;
pub mod table;

pub use breakpoints::{compute_breakpoints, BreakpointSet, WidthBreakpoint};
pub use row_view::RowViewState;
pub use table::TableViewState;

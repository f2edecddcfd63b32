//! Domain model types (pure).
//!
//! Columns, rows, cell values, and the sort/filter engine. Everything here is
//! pure data plus pure functions; nothing touches the terminal or I/O.

pub mod column;
pub mod error;
pub mod query;
pub mod row;
pub mod value;

// Re-export for convenience
pub use column::{column_for_key, ColumnSpec, EnabledPredicate, LabelRenderer, ValueRenderer};
pub use error::{AppError, InputError, ParseError};
pub use query::{derive_view, FilterSpec, SortSpec};
pub use row::{Row, RowBuilder, RowId};
pub use value::CellValue;

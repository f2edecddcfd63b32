//! flextab
//!
//! Responsive TUI table for JSONL row data. Columns declare a planned width
//! and a priority; the width allocator turns those into per-column
//! visibility breakpoints so the collapsed strip degrades gracefully as the
//! terminal narrows. Any row expands in place to show every field it
//! carries.
//!
//! Pure Core / Impure Shell: `model` and `view_state` are pure and fully
//! unit-testable; `view` owns the terminal; `source` owns input I/O.

pub mod config;
pub mod demo;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod view;
pub mod view_state;

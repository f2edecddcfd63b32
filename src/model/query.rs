//! Pure sort/filter engine producing a derived row sequence.
//!
//! Derivation is a pure recomputation from inputs on every pass, never an
//! incrementally mutated cache: callers hand in the raw rows plus optional
//! specs and get a fresh sequence back.

use super::row::Row;
use super::value::CellValue;
use std::cmp::Ordering;

/// Single-key sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Column key to sort by.
    pub key: String,
    /// Ascending when true, descending when false.
    pub ascending: bool,
}

impl SortSpec {
    /// Ascending sort on the given key.
    pub fn ascending(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ascending: true,
        }
    }

    /// Descending sort on the given key.
    pub fn descending(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ascending: false,
        }
    }
}

/// Single-key exact-match filter specification.
///
/// Only exact equality is supported; there is no range or partial matching.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    /// Column key to filter on.
    pub key: String,
    /// Value rows must carry to survive the filter.
    pub value: CellValue,
}

impl FilterSpec {
    /// Filter rows whose `key` field equals `value` exactly.
    pub fn new(key: &str, value: impl Into<CellValue>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Derive the visible row sequence from raw rows plus optional specs.
///
/// Filter applies before sort. Rows missing the filter key are dropped (a key
/// absent from every row yields an empty result rather than an error). The
/// sort is stable, so equal keys keep their relative input order; missing
/// sort values coerce to the empty string for comparability.
///
/// With neither spec supplied, the result equals the input.
pub fn derive_view(rows: &[Row], sort: Option<&SortSpec>, filter: Option<&FilterSpec>) -> Vec<Row> {
    let mut derived: Vec<Row> = match filter {
        Some(f) => rows
            .iter()
            .filter(|row| row.get(&f.key).is_some_and(|v| *v == f.value))
            .cloned()
            .collect(),
        None => rows.to_vec(),
    };

    if let Some(s) = sort {
        derived.sort_by(|a, b| {
            let order = compare_rows(a, b, &s.key);
            if s.ascending { order } else { order.reverse() }
        });
    }

    derived
}

/// Three-way comparison of two rows on a single key.
///
/// Missing values coerce to the empty string so rows without the key are
/// still ordered rather than panicking or being dropped.
fn compare_rows(a: &Row, b: &Row, key: &str) -> Ordering {
    const EMPTY: CellValue = CellValue::Empty;
    let a_value = a.get(key).unwrap_or(&EMPTY);
    let b_value = b.get(key).unwrap_or(&EMPTY);
    a_value.sort_cmp(b_value)
}

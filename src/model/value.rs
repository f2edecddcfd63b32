//! Scalar cell values.
//!
//! Rows are open-ended mappings from column key to a scalar value. The value
//! enum carries the handful of scalar shapes the table understands: strings,
//! numbers, booleans, dates, and an explicit empty marker for fields that are
//! present but carry no value.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;

/// A scalar value stored in a row cell.
///
/// # Equality
///
/// Filtering uses exact equality. Integers and floats that denote the same
/// number compare equal (`Int(1) == Float(1.0)`), matching the loose numeric
/// equality of the data sources this crate ingests. All other cross-variant
/// comparisons are unequal.
///
/// # Ordering
///
/// Sorting needs a total order over arbitrary mixes of values. Same-variant
/// values compare natively (numeric, chronological, lexicographic). Mixed
/// variants fall back to comparing display strings, with `Empty` coercing to
/// the empty string so missing values sort first ascending.
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Timestamp value.
    Date(DateTime<Utc>),
    /// Present-but-empty marker.
    Empty,
}

impl CellValue {
    /// Whether this value counts as empty for the `hide_*_if_undefined`
    /// column flags.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric view of the value, if it is a number.
    fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(n) => Some(*n as f64),
            CellValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Three-way comparison used by the sort engine.
    ///
    /// Total: every pair of values is ordered. `None` on the row side is
    /// handled by the caller coercing to [`CellValue::Empty`] first.
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        use CellValue::*;

        match (self, other) {
            (Str(a), Str(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Empty, Empty) => Ordering::Equal,
            _ => {
                if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
                    // Covers Float/Float and Int/Float mixes. NaN never
                    // reaches here from parsed input; treat it as equal.
                    return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                }
                self.to_string().cmp(&other.to_string())
            }
        }
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        use CellValue::*;

        match (self, other) {
            (Str(a), Str(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Date(a), Date(b)) => a == b,
            (Empty, Empty) => true,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Str(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M")),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Str(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(d: DateTime<Utc>) -> Self {
        CellValue::Date(d)
    }
}

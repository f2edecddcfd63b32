//! Row data: a stable identity plus an ordered, open-ended set of fields.

use super::value::CellValue;

/// Stable numeric row identity.
///
/// Rows are diffed and keyed by this id, never by list position, so that
/// appending rows does not disturb the view state of existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(i64);

impl RowId {
    /// Create a RowId from a raw value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A single data row.
///
/// Fields are an ordered list of `(key, value)` pairs rather than a hash map:
/// the expanded view renders every field the row carries, in the order the
/// data source supplied them, so insertion order must survive.
///
/// Rows are immutable once constructed; the data source replaces or appends
/// whole rows, it never mutates cells in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    fields: Vec<(String, CellValue)>,
}

impl Row {
    /// Create a row from its id and ordered fields.
    pub fn new(id: impl Into<RowId>, fields: Vec<(String, CellValue)>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// The row's stable identity.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// Look up a field value by column key.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate fields in input order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Convenience builder for rows in tests and demo data.
#[derive(Debug, Default)]
pub struct RowBuilder {
    fields: Vec<(String, CellValue)>,
}

impl RowBuilder {
    /// Start an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, preserving insertion order.
    pub fn field(mut self, key: &str, value: impl Into<CellValue>) -> Self {
        self.fields.push((key.to_string(), value.into()));
        self
    }

    /// Finish with the given id.
    pub fn build(self, id: i64) -> Row {
        Row::new(id, self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_field_by_key() {
        let row = RowBuilder::new()
            .field("subject", "Pump inspection")
            .field("status", "Draft")
            .build(1);

        assert_eq!(row.get("status"), Some(&CellValue::from("Draft")));
        assert_eq!(row.get("missing"), None);
    }

    #[test]
    fn fields_iterate_in_insertion_order() {
        let row = RowBuilder::new()
            .field("b", 2i64)
            .field("a", 1i64)
            .field("c", 3i64)
            .build(7);

        let keys: Vec<&str> = row.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn row_id_is_stable_and_comparable() {
        let row = RowBuilder::new().field("x", 1i64).build(42);
        assert_eq!(row.id(), RowId::new(42));
        assert_eq!(row.id().get(), 42);
    }

    #[test]
    fn duplicate_keys_resolve_to_first_occurrence() {
        let row = Row::new(
            1,
            vec![
                ("k".to_string(), CellValue::from("first")),
                ("k".to_string(), CellValue::from("second")),
            ],
        );

        assert_eq!(row.get("k"), Some(&CellValue::from("first")));
    }
}

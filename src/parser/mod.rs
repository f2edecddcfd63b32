//! JSONL parser for table rows.
//!
//! Each input line is one JSON object; keys map to row fields in the order
//! they appear in the document. A numeric `id` field is required, it is the
//! stable identity that expansion state and streaming appends key on.

use crate::model::{CellValue, ParseError, Row, RowBuilder};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Key carrying the stable row identity.
const ID_KEY: &str = "id";

/// Parse one JSONL line into a row.
///
/// `line_number` is 1-based and only used for diagnostics. Field order in
/// the JSON object is preserved in the resulting row, which is what the
/// expanded view iterates.
pub fn parse_line(line: &str, line_number: usize) -> Result<Row, ParseError> {
    let value: Value = serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
        line: line_number,
        reason: e.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(ParseError::NotAnObject {
            line: line_number,
            found: json_type_name(&value).to_string(),
        });
    };

    let id = map
        .get(ID_KEY)
        .and_then(Value::as_i64)
        .ok_or(ParseError::MissingId { line: line_number })?;

    let mut builder = RowBuilder::new();
    for (key, field) in &map {
        if key == ID_KEY {
            continue;
        }
        builder = builder.field(key, cell_value(field));
    }
    Ok(builder.build(id))
}

/// Map a JSON value to a cell value.
///
/// RFC 3339 strings become dates so date columns sort chronologically
/// instead of lexically. Nested arrays and objects degrade to their compact
/// JSON text; the table has no structured rendering for them.
fn cell_value(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Int(i),
            None => CellValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => CellValue::Date(dt.with_timezone(&Utc)),
            Err(_) => CellValue::Str(s.clone()),
        },
        other => CellValue::Str(other.to_string()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_object_with_typed_fields() {
        let row = parse_line(
            r#"{"id": 3, "subject": "Repair", "count": 7, "ratio": 0.5, "open": true}"#,
            1,
        )
        .expect("valid line");

        assert_eq!(row.id().get(), 3);
        assert_eq!(row.get("subject"), Some(&CellValue::Str("Repair".into())));
        assert_eq!(row.get("count"), Some(&CellValue::Int(7)));
        assert_eq!(row.get("ratio"), Some(&CellValue::Float(0.5)));
        assert_eq!(row.get("open"), Some(&CellValue::Bool(true)));
    }

    #[test]
    fn preserves_document_field_order() {
        let row = parse_line(r#"{"id": 1, "zeta": "z", "alpha": "a", "mid": "m"}"#, 1)
            .expect("valid line");

        let keys: Vec<&str> = row.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn id_field_is_not_duplicated_into_fields() {
        let row = parse_line(r#"{"id": 1, "subject": "x"}"#, 1).expect("valid line");
        assert!(row.get("id").is_none());
    }

    #[test]
    fn null_becomes_empty() {
        let row = parse_line(r#"{"id": 1, "equipment": null}"#, 1).expect("valid line");
        assert_eq!(row.get("equipment"), Some(&CellValue::Empty));
    }

    #[test]
    fn rfc3339_string_becomes_date() {
        let row = parse_line(r#"{"id": 1, "created": "2024-03-05T10:30:00Z"}"#, 1)
            .expect("valid line");

        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();
        assert_eq!(row.get("created"), Some(&CellValue::Date(expected)));
    }

    #[test]
    fn plain_string_stays_a_string() {
        let row = parse_line(r#"{"id": 1, "status": "2024 planning"}"#, 1).expect("valid line");
        assert_eq!(row.get("status"), Some(&CellValue::Str("2024 planning".into())));
    }

    #[test]
    fn nested_value_degrades_to_json_text() {
        let row = parse_line(r#"{"id": 1, "tags": ["a", "b"]}"#, 1).expect("valid line");
        assert_eq!(row.get("tags"), Some(&CellValue::Str(r#"["a","b"]"#.into())));
    }

    #[test]
    fn invalid_json_reports_line_number() {
        let err = parse_line("not json", 42).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { line: 42, .. }));
    }

    #[test]
    fn non_object_is_rejected() {
        let err = parse_line("[1, 2]", 7).unwrap_err();
        match err {
            ParseError::NotAnObject { line, found } => {
                assert_eq!(line, 7);
                assert_eq!(found, "array");
            }
            other => panic!("expected NotAnObject, got {other:?}"),
        }
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = parse_line(r#"{"subject": "x"}"#, 3).unwrap_err();
        assert!(matches!(err, ParseError::MissingId { line: 3 }));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = parse_line(r#"{"id": "abc"}"#, 3).unwrap_err();
        assert!(matches!(err, ParseError::MissingId { line: 3 }));
    }
}

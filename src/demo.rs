//! Built-in demo data for `--sample`.
//!
//! A deterministic set of maintenance-claim rows plus a column configuration
//! that exercises the degradation flags: priority-based hiding, pinned and
//! hidden columns, empty-value suppression, and custom renderers.

use crate::model::{CellValue, ColumnSpec, Row, RowBuilder};
use chrono::{Duration, TimeZone, Utc};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const SUBJECTS: &[&str] = &[
    "Pump inspection",
    "Conveyor belt replacement",
    "Heat exchanger cleaning",
    "Valve calibration",
    "Compressor overhaul",
    "Filter change",
    "Bearing lubrication",
];

const STATUSES: &[&str] = &["Draft", "Submitted", "Approved", "In progress", "Done"];

const ASSIGNEES: &[&str] = &["m.keller", "a.novak", "s.lindgren", "j.okafor"];

const EQUIPMENT: &[&str] = &["PMP-104", "CNV-220", "HX-017", "VLV-453"];

/// Generate `count` deterministic sample rows.
///
/// Ids start at 1. Every fifth row has no equipment assigned and every
/// seventh carries no notes, so the empty-value handling is visible in the
/// demo without hand-crafted input.
pub fn sample_rows(count: usize) -> Vec<Row> {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 8, 8, 0, 0).single();
    (0..count)
        .map(|i| {
            let id = (i + 1) as i64;
            let mut builder = RowBuilder::new()
                .field("subject", SUBJECTS[i % SUBJECTS.len()])
                .field("status", STATUSES[i % STATUSES.len()]);

            if let Some(epoch) = epoch {
                builder = builder.field("created", epoch + Duration::hours(7 * i as i64));
            }

            builder = builder.field("assignee", ASSIGNEES[i % ASSIGNEES.len()]);

            let equipment = if i % 5 == 4 {
                CellValue::Empty
            } else {
                CellValue::from(EQUIPMENT[i % EQUIPMENT.len()])
            };
            builder = builder
                .field("equipment", equipment)
                .field("hours", ((i * 3) % 14 + 1) as i64);

            if i % 7 != 6 {
                builder = builder.field("notes", format!("Scheduled check #{id}"));
            }

            builder.build(id)
        })
        .collect()
}

/// Column configuration for the demo rows.
///
/// Priorities order the width degradation: subject survives longest, then
/// status and the creation date; equipment and hours fold away first. Notes
/// only ever appear in the expanded view.
pub fn demo_columns(date_format: &str) -> Vec<ColumnSpec> {
    let date_format = date_format.to_string();
    vec![
        ColumnSpec::new("subject", "Subject", 34, 10).hide_main_label(),
        ColumnSpec::new("status", "Status", 16, 8).renderer(move |_label, value, _row, _editable| {
            let style = match value.to_string().as_str() {
                "Done" => Style::default().fg(Color::Green),
                "In progress" => Style::default().fg(Color::Yellow),
                _ => Style::default(),
            };
            Line::from(Span::styled(format!("{value:<14}"), style))
        }),
        ColumnSpec::new("created", "Created", 18, 6).renderer(move |_label, value, _row, _editable| {
            let text = match value {
                CellValue::Date(dt) => dt.format(&date_format).to_string(),
                other => other.to_string(),
            };
            Line::from(format!("{text:<16}"))
        }),
        ColumnSpec::new("assignee", "Assignee", 20, 5),
        ColumnSpec::new("equipment", "Equipment", 18, 3).hide_empty_values(),
        ColumnSpec::new("hours", "Est. hours", 12, 2).label_renderer(|_value, row| {
            match row.get("status").map(|v| v.to_string()).as_deref() {
                Some("Done") => "Spent hours".to_string(),
                _ => "Est. hours".to_string(),
            }
        }),
        ColumnSpec::new("notes", "Notes", 30, 1)
            .always_hidden()
            .hide_label_if_undefined(),
    ]
}

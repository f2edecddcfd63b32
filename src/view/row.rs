//! Row presenter: collapsed strip and expanded detail rendering.
//!
//! The collapsed strip shows only the columns whose breakpoint the measured
//! width satisfies; the expanded block shows every field the row carries,
//! falling back to a raw key/value pair when no column spec matches.

use crate::model::{column_for_key, CellValue, ColumnSpec, Row};
use crate::view::styles::TableStyles;
use crate::view_state::BreakpointSet;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad or truncate `text` to exactly `width` display cells.
///
/// Truncation is per-character on display width; wide glyphs that straddle
/// the boundary are dropped rather than split.
fn fit_to_width(text: &str, width: u16) -> String {
    let width = width as usize;
    let text_width = text.width();
    if text_width == width {
        return text.to_string();
    }
    if text_width < width {
        let mut padded = String::with_capacity(text.len() + width - text_width);
        padded.push_str(text);
        padded.extend(std::iter::repeat(' ').take(width - text_width));
        return padded;
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Render the collapsed strip for one row.
///
/// Walks the breakpoints in column declaration order; a column appears iff
/// the measured width reaches its threshold or the column is `always_show`.
/// Always-hidden columns never appear here regardless of width. Columns
/// disabled for this row by their `is_enabled` predicate are skipped.
pub fn collapsed_line(
    columns: &[ColumnSpec],
    breakpoints: &BreakpointSet,
    row: &Row,
    measured_width: u16,
    styles: &TableStyles,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for breakpoint in breakpoints.iter() {
        let Some(column) = column_for_key(columns, &breakpoint.key) else {
            continue;
        };
        if !breakpoints.is_visible(column, measured_width) {
            continue;
        }
        if !column.is_enabled_for(Some(row)) {
            continue;
        }

        let value = row.get(&column.key).unwrap_or(&CellValue::Empty);

        if let Some(renderer) = &column.renderer {
            spans.extend(renderer(&column.label, value, row, false).spans);
            spans.push(Span::raw(" "));
            continue;
        }

        let value_style = column.style_override.unwrap_or(styles.strip_value);
        if column.hide_main_label {
            spans.push(Span::styled(
                fit_to_width(&value.to_string(), column.planned_width),
                value_style,
            ));
        } else {
            let label = effective_label(column, value, row);
            let label_width = (label.width() + 2).min(column.planned_width as usize) as u16;
            spans.push(Span::styled(
                fit_to_width(&format!("{label}: "), label_width),
                styles.strip_label,
            ));
            spans.push(Span::styled(
                fit_to_width(
                    &value.to_string(),
                    column.planned_width.saturating_sub(label_width),
                ),
                value_style,
            ));
        }
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Render the expanded detail block for one row.
///
/// Every field present in the row is rendered in field order. A field whose
/// key matches a column spec uses that spec's label, renderers, and hide
/// flags; a field with no matching spec degrades to a raw `key: value` line
/// with no styling metadata. This lookup never fails the render.
pub fn expanded_lines(
    columns: &[ColumnSpec],
    row: &Row,
    styles: &TableStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (key, value) in row.fields() {
        match column_for_key(columns, key) {
            Some(column) => {
                if let Some(line) = detail_line(column, value, row, styles) {
                    lines.push(line);
                }
            }
            None => {
                lines.push(Line::from(Span::styled(
                    format!("  {key}: {value}"),
                    styles.raw_field,
                )));
            }
        }
    }

    lines
}

/// Detail line for a field with a matching column spec.
///
/// Returns `None` when the column's hide flags suppress the field entirely.
fn detail_line(
    column: &ColumnSpec,
    value: &CellValue,
    row: &Row,
    styles: &TableStyles,
) -> Option<Line<'static>> {
    if !column.is_enabled_for(Some(row)) {
        return None;
    }

    let empty = value.is_empty();
    if empty && (column.hide_column_if_undefined || column.hide_empty_values) {
        return None;
    }

    // A custom renderer produces the complete visual unit, label included.
    if let Some(renderer) = &column.renderer {
        let rendered = renderer(&column.label, value, row, false);
        let mut spans = vec![Span::raw("  ")];
        spans.extend(rendered.spans);
        return Some(Line::from(spans));
    }

    let show_label = !column.hide_label && !(empty && column.hide_label_if_undefined);
    let value_style = column.style_override.unwrap_or(styles.detail_value);

    let mut spans = vec![Span::raw("  ")];
    if show_label {
        let label = effective_label(column, value, row);
        spans.push(Span::styled(format!("{label}: "), styles.detail_label));
    }
    spans.push(Span::styled(value.to_string(), value_style));
    Some(Line::from(spans))
}

/// Label text for a column, honoring a `label_renderer` override.
fn effective_label(column: &ColumnSpec, value: &CellValue, row: &Row) -> String {
    match &column.label_renderer {
        Some(renderer) => renderer(value, row),
        None => column.label.clone(),
    }
}

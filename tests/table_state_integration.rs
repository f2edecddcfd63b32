//! Integration tests for the pure pipeline: JSONL in, derived view-state out.
//!
//! No terminal involved; these exercise parser, container, allocator, and
//! presenter together the way the event loop drives them.

use flextab::model::{ColumnSpec, FilterSpec, RowId, SortSpec};
use flextab::parser::parse_line;
use flextab::view::{collapsed_line, ColorConfig, TableStyles};
use flextab::view_state::TableViewState;

fn claim_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("subject", "Subject", 30, 10).hide_main_label(),
        ColumnSpec::new("status", "Status", 20, 5),
        ColumnSpec::new("hours", "Hours", 10, 2),
        ColumnSpec::new("notes", "Notes", 30, 1).always_hidden(),
    ]
}

fn ingest(state: &mut TableViewState, lines: &[&str]) {
    let rows = lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_line(line, i + 1).expect("valid test line"))
        .collect();
    state.append_rows(rows);
}

fn styles() -> TableStyles {
    TableStyles::with_color_config(ColorConfig::from_env_and_args(true))
}

const LINES: &[&str] = &[
    r#"{"id": 1, "subject": "Pump inspection", "status": "Draft", "hours": 4, "notes": "check seals"}"#,
    r#"{"id": 2, "subject": "Belt replacement", "status": "Done", "hours": 2}"#,
    r#"{"id": 3, "subject": "Valve calibration", "status": "Draft", "hours": 6}"#,
];

#[test]
fn ingested_rows_flow_through_sort_and_filter() {
    let mut state = TableViewState::new(claim_columns(), 0);
    ingest(&mut state, LINES);

    state.set_sort(Some(SortSpec::descending("hours")));
    state.set_filter(Some(FilterSpec::new("status", "Draft")));

    let ids: Vec<i64> = state.visible_rows().iter().map(|r| r.id().get()).collect();
    assert_eq!(ids, vec![3, 1], "Draft rows only, highest hours first");
}

#[test]
fn width_shrink_hides_columns_in_priority_order() {
    let mut state = TableViewState::new(claim_columns(), 0);
    ingest(&mut state, LINES);
    // Thresholds: subject=30, status=50, hours=60.

    let styles = styles();
    let rows = state.visible_rows();

    state.set_measured_width(70);
    let wide = collapsed_line(
        state.columns(),
        state.breakpoints(),
        &rows[0],
        state.measured_width(),
        &styles,
    )
    .to_string();
    assert!(wide.contains("Pump inspection"));
    assert!(wide.contains("Draft"));
    assert!(wide.contains('4'));

    state.set_measured_width(55);
    let mid = collapsed_line(
        state.columns(),
        state.breakpoints(),
        &rows[0],
        state.measured_width(),
        &styles,
    )
    .to_string();
    assert!(mid.contains("Draft"));
    assert!(!mid.contains('4'), "hours folds away first");

    state.set_measured_width(35);
    let narrow = collapsed_line(
        state.columns(),
        state.breakpoints(),
        &rows[0],
        state.measured_width(),
        &styles,
    )
    .to_string();
    assert!(narrow.contains("Pump inspection"));
    assert!(!narrow.contains("Draft"));
}

#[test]
fn always_hidden_column_stays_out_of_the_strip_at_any_width() {
    let mut state = TableViewState::new(claim_columns(), 0);
    ingest(&mut state, LINES);
    state.set_measured_width(500);

    let rows = state.visible_rows();
    let strip = collapsed_line(
        state.columns(),
        state.breakpoints(),
        &rows[0],
        state.measured_width(),
        &styles(),
    )
    .to_string();

    assert!(!strip.contains("check seals"));
}

#[test]
fn side_panel_offset_shifts_the_visibility_boundary() {
    // Same columns, but 24 cells of the total width belong to the side
    // panel. The hours column needs 60 cells of content, so 84 total.
    let mut with_panel = TableViewState::new(claim_columns(), 24);
    ingest(&mut with_panel, LINES);

    with_panel.set_measured_width(70);
    let rows = with_panel.visible_rows();
    let strip = collapsed_line(
        with_panel.columns(),
        with_panel.breakpoints(),
        &rows[0],
        with_panel.measured_width(),
        &styles(),
    )
    .to_string();
    assert!(!strip.contains('4'), "70 total is below the shifted threshold");

    with_panel.set_measured_width(90);
    let strip = collapsed_line(
        with_panel.columns(),
        with_panel.breakpoints(),
        &rows[0],
        with_panel.measured_width(),
        &styles(),
    )
    .to_string();
    assert!(strip.contains('4'));
}

#[test]
fn expansion_survives_streaming_appends_and_resort() {
    let mut state = TableViewState::new(claim_columns(), 0);
    ingest(&mut state, &LINES[..2]);

    state.toggle_expanded(RowId::new(2));
    assert!(state.is_expanded(RowId::new(2)));

    // A later poll delivers another row, then the user changes the sort.
    ingest(&mut state, &LINES[2..]);
    state.set_sort(Some(SortSpec::ascending("subject")));

    assert!(state.is_expanded(RowId::new(2)));
    assert!(!state.is_expanded(RowId::new(3)));
    assert_eq!(state.visible_rows().len(), 3);
}

#[test]
fn repeated_measurements_only_recompute_on_change() {
    let mut state = TableViewState::new(claim_columns(), 0);
    ingest(&mut state, LINES);

    assert!(state.set_measured_width(80));
    let generation = state.layout_generation();

    // A storm of identical resize events.
    for _ in 0..10 {
        assert!(!state.set_measured_width(80));
    }
    assert_eq!(state.layout_generation(), generation);

    assert!(state.set_measured_width(81));
    assert_eq!(state.layout_generation(), generation + 1);
}

//! Width allocator: per-column visibility breakpoints.
//!
//! For a given offset (width already consumed by fixed chrome, e.g. a side
//! panel), each visible-capable column gets the cumulative width threshold
//! below which it must hide. The highest-priority column accumulates first
//! and gets the smallest breakpoint, so it survives the longest as width
//! shrinks. The lowest-priority column ends up with the largest breakpoint
//! and is the first to fold away.

use crate::model::ColumnSpec;

/// Cumulative width threshold for one column.
///
/// The column is visible in the collapsed strip iff the measured content
/// width is at least `width`. Derived data, never authoritative: recomputed
/// whenever the measured offset changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthBreakpoint {
    /// Key of the column this threshold applies to.
    pub key: String,
    /// Minimum available width at which the column remains visible.
    pub width: u16,
}

/// Compute visibility breakpoints for a column set.
///
/// 1. Keep visible-capable columns (always-hidden ones never get a
///    breakpoint; they render only in the expanded view).
/// 2. Stable-sort that subset by priority descending, so equal priorities
///    keep their declaration order and the result stays deterministic.
/// 3. Walk the sorted list accumulating planned widths starting from
///    `offset`, recording the running total as each column's breakpoint.
/// 4. Re-project the result back into declaration order, which is how
///    callers consume columns.
///
/// Every visible-capable column gets exactly one breakpoint; read in
/// priority order the widths are monotonically non-decreasing. An empty
/// column set yields an empty result.
pub fn compute_breakpoints(columns: &[ColumnSpec], offset: u16) -> Vec<WidthBreakpoint> {
    let mut by_priority: Vec<&ColumnSpec> = columns
        .iter()
        .filter(|c| c.is_visible_capable())
        .collect();
    // Vec::sort_by is stable, so declaration order breaks priority ties.
    by_priority.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut accumulated = Vec::with_capacity(by_priority.len());
    let mut current_width = offset;
    for column in &by_priority {
        current_width = current_width.saturating_add(column.planned_width);
        accumulated.push(WidthBreakpoint {
            key: column.key.clone(),
            width: current_width,
        });
    }

    columns
        .iter()
        .filter(|c| c.is_visible_capable())
        .filter_map(|column| {
            accumulated
                .iter()
                .find(|bp| bp.key == column.key)
                .map(|bp| WidthBreakpoint {
                    key: bp.key.clone(),
                    width: bp.width,
                })
        })
        .collect()
}

/// A computed breakpoint list with key lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    breakpoints: Vec<WidthBreakpoint>,
}

impl BreakpointSet {
    /// Compute the set for a column configuration and offset.
    pub fn compute(columns: &[ColumnSpec], offset: u16) -> Self {
        Self {
            breakpoints: compute_breakpoints(columns, offset),
        }
    }

    /// Breakpoints in column declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &WidthBreakpoint> {
        self.breakpoints.iter()
    }

    /// Number of breakpoints (equals the visible-capable column count).
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Threshold for a column key, if one was computed.
    pub fn width_for(&self, key: &str) -> Option<u16> {
        self.breakpoints
            .iter()
            .find(|bp| bp.key == key)
            .map(|bp| bp.width)
    }

    /// Whether a column is visible at the given measured width.
    ///
    /// `always_show` columns are exempt from width gating. A visible-capable
    /// column with no recorded breakpoint degrades to always visible rather
    /// than erroring.
    pub fn is_visible(&self, column: &ColumnSpec, measured_width: u16) -> bool {
        if column.always_hidden && !column.always_show {
            return false;
        }
        if column.always_show {
            return true;
        }
        match self.width_for(&column.key) {
            Some(threshold) => measured_width >= threshold,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnSpec;

    fn col(key: &str, width: u16, priority: i32) -> ColumnSpec {
        ColumnSpec::new(key, key, width, priority)
    }

    #[test]
    fn canonical_two_column_scenario() {
        // Higher-priority 'a' accumulates first: breakpoint 100. Lower
        // priority 'b' stacks on top: breakpoint 150, so 'b' hides first as
        // width shrinks below 150.
        let columns = vec![col("a", 100, 2), col("b", 50, 1)];

        let bps = compute_breakpoints(&columns, 0);

        assert_eq!(
            bps,
            vec![
                WidthBreakpoint { key: "a".to_string(), width: 100 },
                WidthBreakpoint { key: "b".to_string(), width: 150 },
            ]
        );
    }

    #[test]
    fn offset_shifts_every_breakpoint() {
        let columns = vec![col("a", 100, 2), col("b", 50, 1)];

        let bps = compute_breakpoints(&columns, 300);

        assert_eq!(bps[0].width, 400);
        assert_eq!(bps[1].width, 450);
    }

    #[test]
    fn empty_column_set_yields_empty_result() {
        assert!(compute_breakpoints(&[], 300).is_empty());
    }

    #[test]
    fn always_hidden_columns_get_no_breakpoint() {
        let columns = vec![
            col("subject", 30, 10),
            col("notes", 20, 4).always_hidden(),
            col("status", 20, 5),
        ];

        let bps = compute_breakpoints(&columns, 0);

        assert_eq!(bps.len(), 2);
        assert!(bps.iter().all(|bp| bp.key != "notes"));
    }

    #[test]
    fn result_is_in_declaration_order_not_priority_order() {
        let columns = vec![col("low", 10, 1), col("high", 10, 9), col("mid", 10, 5)];

        let bps = compute_breakpoints(&columns, 0);

        let keys: Vec<&str> = bps.iter().map(|bp| bp.key.as_str()).collect();
        assert_eq!(keys, vec!["low", "high", "mid"]);
        // high accumulates first (10), mid second (20), low last (30).
        assert_eq!(bps[0].width, 30);
        assert_eq!(bps[1].width, 10);
        assert_eq!(bps[2].width, 20);
    }

    #[test]
    fn priority_ties_break_by_declaration_order() {
        let columns = vec![col("first", 10, 3), col("second", 10, 3), col("third", 10, 3)];

        let bps = compute_breakpoints(&columns, 0);

        // Equal priority walks in declaration order, so the earliest column
        // accumulates first and gets the smallest breakpoint.
        assert_eq!(bps[0].width, 10);
        assert_eq!(bps[1].width, 20);
        assert_eq!(bps[2].width, 30);
    }

    #[test]
    fn breakpoint_equals_offset_plus_higher_or_equal_priority_widths() {
        let columns = vec![
            col("a", 30, 10),
            col("b", 20, 3),
            col("c", 25, 5),
            col("d", 15, 3),
        ];
        let offset = 40;

        let bps = compute_breakpoints(&columns, offset);

        // Priority walk order: a(10), c(5), b(3), d(3); b before d by
        // declaration order.
        assert_eq!(bps[0].width, 40 + 30); // a
        assert_eq!(bps[1].width, 40 + 30 + 25 + 20); // b
        assert_eq!(bps[2].width, 40 + 30 + 25); // c
        assert_eq!(bps[3].width, 40 + 30 + 25 + 20 + 15); // d
    }

    #[test]
    fn always_show_column_still_gets_a_breakpoint() {
        let columns = vec![col("a", 10, 2), col("pin", 10, 1).always_show()];

        let set = BreakpointSet::compute(&columns, 0);

        assert_eq!(set.len(), 2);
        assert!(set.width_for("pin").is_some());
    }

    #[test]
    fn is_visible_gates_on_measured_width() {
        let columns = vec![col("a", 100, 2), col("b", 50, 1)];
        let set = BreakpointSet::compute(&columns, 0);

        assert!(set.is_visible(&columns[0], 120));
        assert!(!set.is_visible(&columns[1], 120));
        assert!(set.is_visible(&columns[1], 150));
    }

    #[test]
    fn is_visible_always_show_ignores_width() {
        let pinned = col("pin", 100, 1).always_show();
        let set = BreakpointSet::compute(std::slice::from_ref(&pinned), 0);

        assert!(set.is_visible(&pinned, 0));
    }

    #[test]
    fn is_visible_always_hidden_ignores_width() {
        let hidden = col("notes", 10, 1).always_hidden();
        let visible = col("a", 10, 2);
        let set = BreakpointSet::compute(&[visible, hidden.clone()], 0);

        assert!(!set.is_visible(&hidden, u16::MAX));
    }

    #[test]
    fn missing_breakpoint_degrades_to_always_visible() {
        let set = BreakpointSet::default();
        let stray = col("stray", 10, 1);

        assert!(set.is_visible(&stray, 0), "no threshold means no gating");
    }
}

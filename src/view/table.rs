//! Table widget: renders the derived row sequence.
//!
//! Each visible row contributes one collapsed strip line, plus its detail
//! block when expanded. The widget is pure and stateless; selection and
//! scroll come in from the caller and all row data is read from the
//! view-state container.

use crate::view::row::{collapsed_line, expanded_lines};
use crate::view::styles::TableStyles;
use crate::view_state::TableViewState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Responsive table widget.
pub struct TableView<'a> {
    state: &'a TableViewState,
    styles: &'a TableStyles,
    selected: Option<usize>,
}

impl<'a> TableView<'a> {
    pub fn new(state: &'a TableViewState, styles: &'a TableStyles) -> Self {
        Self {
            state,
            styles,
            selected: None,
        }
    }

    /// Highlight the row at this index in the derived sequence.
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Build the full line list: strip per row, detail block when expanded.
    ///
    /// Returns the lines together with the line index at which the selected
    /// row's strip sits, for scroll positioning.
    fn build_lines(&self) -> (Vec<Line<'static>>, Option<usize>) {
        let rows = self.state.visible_rows();
        let columns = self.state.columns();
        let breakpoints = self.state.breakpoints();
        let width = self.state.measured_width();

        let mut lines = Vec::with_capacity(rows.len());
        let mut selected_line = None;

        for (index, row) in rows.iter().enumerate() {
            let mut strip = collapsed_line(columns, breakpoints, row, width, self.styles);
            if self.selected == Some(index) {
                selected_line = Some(lines.len());
                strip = strip.style(self.styles.selected);
            }
            lines.push(strip);

            if self.state.is_expanded(row.id()) {
                lines.extend(expanded_lines(columns, row, self.styles));
            }
        }

        (lines, selected_line)
    }
}

impl Widget for TableView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let row_count = self.state.visible_rows().len();
        let (lines, selected_line) = self.build_lines();

        // Keep the selected strip inside the viewport.
        let viewport = area.height.saturating_sub(2) as usize;
        let scroll = match selected_line {
            Some(line) if viewport > 0 && line >= viewport => line + 1 - viewport,
            _ => 0,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Rows ({row_count}) "));
        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}

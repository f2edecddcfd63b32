//! TUI rendering and terminal management (impure shell)

mod row;
pub mod styles;
mod table;

pub use row::{collapsed_line, expanded_lines};
pub use styles::{ColorConfig, TableStyles};
pub use table::TableView;

use crate::model::AppError;
use crate::parser;
use crate::source::InputSource;
use crate::view_state::TableViewState;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    table: TableViewState,
    styles: TableStyles,
    input_source: InputSource,
    line_counter: usize,
    /// Selection index into the derived (visible) row sequence.
    selected: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        mut input_source: InputSource,
        mut table: TableViewState,
        styles: TableStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Load initial content from input source
        let lines = input_source.poll()?;
        let mut line_counter = 0;
        let rows = parse_lines(&lines, &mut line_counter);
        table.append_rows(rows);

        // Seed the measurement with the real terminal width so the first
        // frame already reflects it.
        let width = match terminal.size() {
            Ok(size) if size.width > 0 => size.width,
            _ => 80,
        };
        table.set_measured_width(width);

        Ok(Self {
            terminal,
            table,
            styles,
            input_source,
            line_counter,
            selected: 0,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TIMER_INTERVAL: Duration = Duration::from_millis(250);

        // Initial render so the screen has content immediately.
        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break;
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, _height) => {
                        // Total width feeds the allocator; its thresholds
                        // already account for the side panel offset.
                        self.table.set_measured_width(width);
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                // Timer elapsed, poll the input source for new rows.
                if self.poll_input()? {
                    self.draw()?;
                }
            }
        }

        restore_terminal()?;
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Poll input source for new lines and append any parsed rows.
    ///
    /// Returns whether new rows arrived.
    fn poll_input(&mut self) -> Result<bool, TuiError> {
        let lines = self.input_source.poll()?;
        if lines.is_empty() {
            return Ok(false);
        }
        debug!("processing {} new lines", lines.len());
        let rows = parse_lines(&lines, &mut self.line_counter);
        let got_rows = !rows.is_empty();
        self.table.append_rows(rows);
        Ok(got_rows)
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.table.visible_rows().len();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Toggle by row id, not position: the id stays valid across
                // later sorts, filters, and appends.
                if let Some(row) = self.table.visible_rows().get(self.selected) {
                    self.table.toggle_expanded(row.id());
                }
            }
            _ => {}
        }
        false
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        // Selection can go stale when a filter shrinks the derived sequence.
        let count = self.table.visible_rows().len();
        if count > 0 && self.selected >= count {
            self.selected = count - 1;
        }

        let table = &self.table;
        let styles = &self.styles;
        let selected = if count > 0 { Some(self.selected) } else { None };
        let line_counter = self.line_counter;

        self.terminal.draw(|frame| {
            render_frame(frame, table, styles, selected, line_counter);
        })?;
        Ok(())
    }

    /// Current table view-state (test-only accessor)
    #[cfg(test)]
    pub(crate) fn table(&self) -> &TableViewState {
        &self.table
    }

    /// Render a single frame (test-only accessor)
    #[cfg(test)]
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    #[cfg(test)]
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Parse raw input lines into rows, logging malformed ones.
///
/// The line counter tracks absolute input line numbers across polls so parse
/// diagnostics stay accurate for streaming input.
fn parse_lines(lines: &[String], line_counter: &mut usize) -> Vec<crate::model::Row> {
    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        *line_counter += 1;
        if line.trim().is_empty() {
            continue;
        }
        match parser::parse_line(line, *line_counter) {
            Ok(row) => rows.push(row),
            Err(err) => warn!("parse error at line {}: {}", line_counter, err),
        }
    }
    rows
}

/// Lay out and render one frame: fixed side panel, table on the right.
fn render_frame(
    frame: &mut Frame,
    table: &TableViewState,
    styles: &TableStyles,
    selected: Option<usize>,
    line_counter: usize,
) {
    let offset = table.offset();
    let area = frame.area();

    if offset == 0 {
        frame.render_widget(TableView::new(table, styles).selected(selected), area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(offset), Constraint::Min(0)])
        .split(area);

    render_side_panel(frame, chunks[0], table, selected, line_counter);
    frame.render_widget(TableView::new(table, styles).selected(selected), chunks[1]);
}

/// The fixed-width side panel whose footprint is folded into the allocator
/// offset.
fn render_side_panel(
    frame: &mut Frame,
    area: Rect,
    table: &TableViewState,
    selected: Option<usize>,
    line_counter: usize,
) {
    let sort = match table.sort() {
        Some(s) if s.ascending => format!("{} asc", s.key),
        Some(s) => format!("{} desc", s.key),
        None => "none".to_string(),
    };
    let filter = match table.filter() {
        Some(f) => format!("{}={}", f.key, f.value),
        None => "none".to_string(),
    };

    let lines = vec![
        Line::from(format!("rows: {}", table.rows().len())),
        Line::from(format!("shown: {}", table.visible_rows().len())),
        Line::from(format!("input lines: {line_counter}")),
        Line::from(format!("sort: {sort}")),
        Line::from(format!("filter: {filter}")),
        Line::from(format!("width: {}", table.measured_width())),
        Line::from(match selected {
            Some(index) => format!("selected: {}", index + 1),
            None => "selected: -".to_string(),
        }),
        Line::from(""),
        Line::from("j/k move"),
        Line::from("enter expand"),
        Line::from("q quit"),
    ];

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" flextab "))
        .render(area, frame.buffer_mut());
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

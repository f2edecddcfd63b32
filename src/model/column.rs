//! Column descriptors: the configuration surface an embedding application
//! uses to describe what the table shows and how it degrades under width
//! pressure.

use super::row::Row;
use super::value::CellValue;
use ratatui::style::Style;
use ratatui::text::Line;
use std::fmt;
use std::sync::Arc;

/// Custom value renderer.
///
/// Invoked with the column label, the cell value, the full row, and whether
/// the cell is editable. The renderer fully overrides the default
/// label-plus-value presentation; it is trusted to produce the complete
/// visual unit, including its own label if it wants one.
pub type ValueRenderer = Arc<dyn Fn(&str, &CellValue, &Row, bool) -> Line<'static> + Send + Sync>;

/// Custom label renderer.
///
/// Used when the label (or part of it) has to come from row content, e.g.
/// "Weight (kg)" where the unit lives in another field of the row.
pub type LabelRenderer = Arc<dyn Fn(&CellValue, &Row) -> String + Send + Sync>;

/// Per-row column gate. Returning false suppresses the column for that row.
pub type EnabledPredicate = Arc<dyn Fn(Option<&Row>) -> bool + Send + Sync>;

/// Static descriptor for one column.
///
/// A column set is immutable configuration, defined once at startup. The
/// width allocator consumes `planned_width` and `priority`; the row presenter
/// consumes the visibility flags and renderers.
///
/// `always_hidden` and `always_show` are mutually exclusive in intent; when
/// both are set, `always_show` wins and the column is treated as
/// visible-capable.
#[derive(Clone)]
pub struct ColumnSpec {
    /// Optional id disambiguating columns that share a data key.
    pub id: Option<String>,
    /// Key of the field this column reads from the row.
    pub key: String,
    /// Planned width in terminal cells. Not the final rendered width; used
    /// to estimate how much of the row budget this column consumes.
    pub planned_width: u16,
    /// Visibility priority. Larger numbers survive longer as width shrinks.
    pub priority: i32,
    /// Human-readable column label.
    pub label: String,
    /// Never shown in the collapsed strip; only in the expanded view.
    pub always_hidden: bool,
    /// Exempt from width-based hiding in the collapsed strip.
    pub always_show: bool,
    /// Suppress the label in the expanded view.
    pub hide_label: bool,
    /// Suppress the label in the collapsed strip.
    pub hide_main_label: bool,
    /// Omit the whole field in the expanded view when the value is empty.
    pub hide_column_if_undefined: bool,
    /// Omit only the label (still show the raw value) when the value is empty.
    pub hide_label_if_undefined: bool,
    /// Suppress empty fields entirely in the expanded view.
    pub hide_empty_values: bool,
    /// Exclude this column from sort interactions.
    pub disable_sort: bool,
    /// Style override for the rendered cell.
    pub style_override: Option<Style>,
    /// Custom value renderer; overrides default presentation entirely.
    pub renderer: Option<ValueRenderer>,
    /// Custom label renderer; overrides only the label text.
    pub label_renderer: Option<LabelRenderer>,
    /// Per-row gate deciding whether the column applies to a row.
    pub is_enabled: Option<EnabledPredicate>,
}

impl ColumnSpec {
    /// Create a column with the required fields; all flags default to off.
    pub fn new(key: &str, label: &str, planned_width: u16, priority: i32) -> Self {
        Self {
            id: None,
            key: key.to_string(),
            planned_width,
            priority,
            label: label.to_string(),
            always_hidden: false,
            always_show: false,
            hide_label: false,
            hide_main_label: false,
            hide_column_if_undefined: false,
            hide_label_if_undefined: false,
            hide_empty_values: false,
            disable_sort: false,
            style_override: None,
            renderer: None,
            label_renderer: None,
            is_enabled: None,
        }
    }

    /// Set the disambiguating id.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Mark as always hidden (expanded view only).
    pub fn always_hidden(mut self) -> Self {
        self.always_hidden = true;
        self
    }

    /// Mark as exempt from width-based hiding.
    pub fn always_show(mut self) -> Self {
        self.always_show = true;
        self
    }

    /// Suppress the label in the expanded view.
    pub fn hide_label(mut self) -> Self {
        self.hide_label = true;
        self
    }

    /// Suppress the label in the collapsed strip.
    pub fn hide_main_label(mut self) -> Self {
        self.hide_main_label = true;
        self
    }

    /// Omit the whole field when the value is empty.
    pub fn hide_column_if_undefined(mut self) -> Self {
        self.hide_column_if_undefined = true;
        self
    }

    /// Omit only the label when the value is empty.
    pub fn hide_label_if_undefined(mut self) -> Self {
        self.hide_label_if_undefined = true;
        self
    }

    /// Suppress empty fields in the expanded view.
    pub fn hide_empty_values(mut self) -> Self {
        self.hide_empty_values = true;
        self
    }

    /// Exclude from sort interactions.
    pub fn disable_sort(mut self) -> Self {
        self.disable_sort = true;
        self
    }

    /// Override the cell style.
    pub fn style(mut self, style: Style) -> Self {
        self.style_override = Some(style);
        self
    }

    /// Attach a custom value renderer.
    pub fn renderer(
        mut self,
        f: impl Fn(&str, &CellValue, &Row, bool) -> Line<'static> + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Arc::new(f));
        self
    }

    /// Attach a custom label renderer.
    pub fn label_renderer(
        mut self,
        f: impl Fn(&CellValue, &Row) -> String + Send + Sync + 'static,
    ) -> Self {
        self.label_renderer = Some(Arc::new(f));
        self
    }

    /// Attach a per-row enablement predicate.
    pub fn enabled_when(
        mut self,
        f: impl Fn(Option<&Row>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_enabled = Some(Arc::new(f));
        self
    }

    /// Whether this column may appear in the collapsed strip.
    ///
    /// Always-hidden columns are excluded unless `always_show` overrides.
    pub fn is_visible_capable(&self) -> bool {
        !self.always_hidden || self.always_show
    }

    /// Whether the column applies to the given row.
    pub fn is_enabled_for(&self, row: Option<&Row>) -> bool {
        match &self.is_enabled {
            Some(pred) => pred(row),
            None => true,
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("planned_width", &self.planned_width)
            .field("priority", &self.priority)
            .field("label", &self.label)
            .field("always_hidden", &self.always_hidden)
            .field("always_show", &self.always_show)
            .field("hide_label", &self.hide_label)
            .field("hide_main_label", &self.hide_main_label)
            .field("hide_column_if_undefined", &self.hide_column_if_undefined)
            .field("hide_label_if_undefined", &self.hide_label_if_undefined)
            .field("hide_empty_values", &self.hide_empty_values)
            .field("disable_sort", &self.disable_sort)
            .field("renderer", &self.renderer.as_ref().map(|_| "<fn>"))
            .field("label_renderer", &self.label_renderer.as_ref().map(|_| "<fn>"))
            .field("is_enabled", &self.is_enabled.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Find a column spec by data key, in declaration order.
pub fn column_for_key<'a>(columns: &'a [ColumnSpec], key: &str) -> Option<&'a ColumnSpec> {
    columns.iter().find(|c| c.key == key)
}

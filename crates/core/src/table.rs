//! Sortable data-table model.
//!
//! A [`DataTable`] owns the column descriptors, the display options and the
//! component-local sort state. Callers hand it the current rows on every
//! render; the active sort survives data changes and only moves on header
//! clicks.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single table record. Columns address its keys.
pub type Row = serde_json::Map<String, Value>;

/// Custom cell renderer, called with the cell value and the whole row.
pub type CellRenderer = Arc<dyn Fn(&Value, &Row) -> String + Send + Sync>;

/// Callback fired when a rendered row is clicked.
pub type RowClickHandler = Arc<dyn Fn(&Row) + Send + Sync>;

/// Message shown when there are no rows and the caller did not supply one.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data found";

/// Cell text used for `null` or missing values.
pub const NULL_PLACEHOLDER: &str = "-";

static NULL: Value = Value::Null;

// ---------------------------------------------------------------------------
// Column descriptors
// ---------------------------------------------------------------------------

/// Describes how one field of each row is labelled, sorted and rendered.
#[derive(Clone)]
pub struct Column {
    pub key: String,
    pub label: String,
    /// Columns are sortable unless explicitly opted out.
    pub sortable: bool,
    pub render: Option<CellRenderer>,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            render: None,
        }
    }

    /// Mark this column as not sortable; header clicks on it are ignored.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn with_renderer<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &Row) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    fn render_cell(&self, row: &Row) -> String {
        let value = field(row, &self.key);
        match &self.render {
            Some(render) => render(value, row),
            None => format_cell(value),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Sort state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The single active sort column and its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

/// Display flags for a [`DataTable`].
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Global switch; when `false` no column can be sorted.
    pub sortable: bool,
    /// Mark every odd (0-based) rendered row as striped.
    pub striped: bool,
    /// Rows highlight on hover.
    pub hover: bool,
    pub empty_message: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            striped: true,
            hover: true,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendered output
// ---------------------------------------------------------------------------

/// What the table shows for a given set of inputs.
///
/// Precedence is loading, then error, then empty, then rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Error(String),
    Empty(String),
    Rows(RenderedTable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// Whether clicking this header changes the sort.
    pub clickable: bool,
    /// Direction arrow, present only on the active sort column.
    pub indicator: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// The row's `id` as text, or its position when it has none.
    pub key: String,
    pub striped: bool,
    pub hover: bool,
    pub clickable: bool,
    pub cells: Vec<String>,
}

// ---------------------------------------------------------------------------
// DataTable
// ---------------------------------------------------------------------------

/// Column-driven table with click-to-sort on a single active column.
pub struct DataTable {
    columns: Vec<Column>,
    options: TableOptions,
    sort: Option<SortConfig>,
    on_row_click: Option<RowClickHandler>,
}

impl DataTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self::with_options(columns, TableOptions::default())
    }

    pub fn with_options(columns: Vec<Column>, options: TableOptions) -> Self {
        Self {
            columns,
            options,
            sort: None,
            on_row_click: None,
        }
    }

    pub fn on_row_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Row) + Send + Sync + 'static,
    {
        self.on_row_click = Some(Arc::new(handler));
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn sort_config(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Apply a click on the header of column `key`.
    ///
    /// Clicking the active column flips its direction; clicking any other
    /// sortable column makes it active in ascending order. Returns `false`
    /// (and leaves the sort untouched) when sorting is globally disabled or
    /// the column is unknown or not sortable.
    pub fn handle_header_click(&mut self, key: &str) -> bool {
        if !self.is_sortable(key) {
            return false;
        }

        self.sort = Some(match self.sort.take() {
            Some(current) if current.key == key => SortConfig {
                direction: current.direction.toggled(),
                key: current.key,
            },
            _ => SortConfig {
                key: key.to_string(),
                direction: SortDirection::Asc,
            },
        });
        true
    }

    /// Rows in display order. Input order is kept when no sort is active
    /// and for rows that compare equal.
    pub fn sorted_rows<'a>(&self, data: &'a [Row]) -> Vec<&'a Row> {
        let mut rows: Vec<&Row> = data.iter().collect();
        if let Some(sort) = &self.sort {
            rows.sort_by(|a, b| {
                compare_values(field(a, &sort.key), field(b, &sort.key), sort.direction)
            });
        }
        rows
    }

    /// Produce the view for the current inputs.
    ///
    /// An empty error message counts as no error.
    pub fn render(&self, data: &[Row], loading: bool, error: Option<&str>) -> TableView {
        if loading {
            return TableView::Loading;
        }
        if let Some(message) = error.filter(|m| !m.is_empty()) {
            return TableView::Error(message.to_string());
        }
        if data.is_empty() {
            return TableView::Empty(self.options.empty_message.clone());
        }

        let headers = self
            .columns
            .iter()
            .map(|column| {
                let clickable = self.options.sortable && column.sortable;
                let indicator = self
                    .sort
                    .as_ref()
                    .filter(|sort| clickable && sort.key == column.key)
                    .map(|sort| sort.direction);
                HeaderCell {
                    key: column.key.clone(),
                    label: column.label.clone(),
                    clickable,
                    indicator,
                }
            })
            .collect();

        let rows = self
            .sorted_rows(data)
            .into_iter()
            .enumerate()
            .map(|(index, row)| RenderedRow {
                key: row_key(row, index),
                striped: self.options.striped && index % 2 == 1,
                hover: self.options.hover,
                clickable: self.on_row_click.is_some(),
                cells: self.columns.iter().map(|c| c.render_cell(row)).collect(),
            })
            .collect();

        TableView::Rows(RenderedTable { headers, rows })
    }

    /// Fire the row-click callback for the row shown at `index`.
    ///
    /// `index` addresses the sorted order, matching what [`render`](Self::render)
    /// produced. Returns `false` when there is no callback or no such row.
    pub fn click_row(&self, data: &[Row], index: usize) -> bool {
        let Some(handler) = &self.on_row_click else {
            return false;
        };
        match self.sorted_rows(data).get(index) {
            Some(row) => {
                handler(row);
                true
            }
            None => false,
        }
    }

    fn is_sortable(&self, key: &str) -> bool {
        self.options.sortable
            && self
                .columns
                .iter()
                .any(|column| column.key == key && column.sortable)
    }
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("sort", &self.sort)
            .field("on_row_click", &self.on_row_click.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Comparison and formatting
// ---------------------------------------------------------------------------

/// Compare two cell values for sorting in `direction`.
///
/// `null` (and missing) values always sort last, whichever the direction.
/// Numbers compare numerically, strings lexicographically and booleans with
/// `false` first. Values of different types order by type: booleans, then
/// numbers, then strings, then arrays and objects (which compare equal to
/// each other), so the ordering stays total over any mix of cells.
pub fn compare_values(a: &Value, b: &Value, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let ordering = match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) | Value::Object(_) => 4,
    }
}

fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a.cmp(&b);
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Default cell text: strings verbatim, `null` as a dash, anything else as
/// its JSON text.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => NULL_PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn field<'a>(row: &'a Row, key: &str) -> &'a Value {
    row.get(key).unwrap_or(&NULL)
}

/// An `id` of `null`, `false`, `0` or `""` does not identify a row.
fn row_key(row: &Row, index: usize) -> String {
    match row.get("id") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => index.to_string(),
        Some(Value::String(s)) if s.is_empty() => index.to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => index.to_string(),
        Some(id) => format_cell(id),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

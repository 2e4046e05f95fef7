use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a table column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common tabular dtypes.
/// Missing data is an explicit `Null`, never a sentinel number.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    /// Render the cell the way it appears in a delimited text field.
    /// `Null` renders as the empty field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric rules.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether this cell holds no value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// One record of the table: column name → value.
pub type Row = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Table – the complete in-memory dataset
// ---------------------------------------------------------------------------

/// The full parsed table. `columns` preserves the source column order and is
/// the single authority on which columns exist; rows may omit a column, which
/// reads back as `Null`.
#[derive(Debug, Clone)]
pub struct Table {
    /// Ordered list of column names, as written to the sink.
    pub columns: Vec<String>,
    /// All records (rows).
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Read a cell; absent entries read as `Null`.
    pub fn cell<'a>(row: &'a Row, column: &str) -> &'a CellValue {
        row.get(column).unwrap_or(&CellValue::Null)
    }

    /// All non-missing numeric values of a column, in row order.
    /// String / boolean cells are skipped along with nulls.
    pub fn numeric_values(&self, column: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| Self::cell(row, column).as_f64())
            .collect()
    }

    /// Append a column after the existing ones. `values` must be aligned
    /// with the current rows. Replaces values in place if the name exists.
    pub fn add_column(&mut self, name: &str, values: Vec<CellValue>) {
        debug_assert_eq!(values.len(), self.rows.len());
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.insert(name.to_string(), value);
        }
    }

    /// Remove a column entirely; silent no-op when absent.
    pub fn drop_column(&mut self, name: &str) {
        self.columns.retain(|c| c != name);
        for row in &mut self.rows {
            row.remove(name);
        }
    }

    /// Keep only the rows for which the predicate holds. Row indices
    /// re-align automatically; later stages see the filtered set only.
    pub fn retain_rows<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&Row) -> bool,
    {
        self.rows.retain(|row| predicate(row));
    }
}

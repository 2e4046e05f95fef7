use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};

use super::model::{CellValue, Row, Table};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a table from a comma-delimited text file.
///
/// Layout: first row is the header; any column set is accepted, no schema
/// is enforced here. Cell types are guessed per field.
///
/// Fails with [`Error::NotFound`] when the path does not exist and with
/// [`Error::Parse`] when the file is not valid CSV (uneven record lengths,
/// broken quoting).
pub fn load_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let parse_err = |source: csv::Error| Error::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(parse_err)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(parse_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(parse_err)?;

        let mut row = BTreeMap::new();
        for (col_idx, field) in record.iter().enumerate() {
            row.insert(headers[col_idx].clone(), guess_cell_type(field));
        }
        rows.push(row);
    }

    Ok(Table::new(headers, rows))
}

/// Markers a field may carry for "no value"; the files this pipeline sees
/// are written by tools that emit these alongside plain empty fields.
const NULL_MARKERS: &[&str] = &["na", "nan", "null"];

fn guess_cell_type(field: &str) -> CellValue {
    let s = field.trim();
    if s.is_empty() || NULL_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m)) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

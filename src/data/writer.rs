use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

/// Persist a table as comma-delimited text: header row first, then one
/// record per row in column order, no synthetic row-index column.
///
/// The destination's parent directory is created recursively when missing.
/// The table is serialized to a temporary sibling file which is renamed over
/// the destination once fully flushed, so a failed run never leaves a
/// half-written output behind.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| write_err(io::Error::new(io::ErrorKind::InvalidInput, "not a file path")))?
        .to_string_lossy();
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    let mut writer = csv::Writer::from_path(&tmp_path).map_err(|e| write_err(into_io(e)))?;
    writer
        .write_record(&table.columns)
        .map_err(|e| write_err(into_io(e)))?;

    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|col| Table::cell(row, col).to_string())
            .collect();
        writer.write_record(&record).map_err(|e| write_err(into_io(e)))?;
    }

    writer.flush().map_err(write_err)?;
    drop(writer);
    fs::rename(&tmp_path, path).map_err(write_err)?;

    Ok(())
}

/// CSV write errors are I/O at heart; unwrap the inner error when present.
fn into_io(err: csv::Error) -> io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => io_err,
        other => io::Error::other(format!("{other:?}")),
    }
}

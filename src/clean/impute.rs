use crate::data::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Median imputation – the fill pattern shared by several column rules
// ---------------------------------------------------------------------------

/// Median of a sample. Even-sized samples take the mean of the two middle
/// values. Returns `None` for an empty sample, where the median is undefined.
pub fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    Some(if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    })
}

/// Fill every missing cell of `column` with the median of its non-missing
/// numeric values. The median is computed once, before any insertion, so
/// filled cells never feed back into it.
///
/// Returns the median used, or `None` when the column had no numeric values
/// at all; in that case the column is left untouched and the caller decides
/// how loudly to report it.
pub fn impute_median(table: &mut Table, column: &str) -> Option<f64> {
    let m = median(table.numeric_values(column))?;
    for row in &mut table.rows {
        let cell = row.entry(column.to_string()).or_insert(CellValue::Null);
        if cell.is_null() {
            *cell = CellValue::Float(m);
        }
    }
    Some(m)
}

use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::data::model::{CellValue, Table};

use super::impute::impute_median;
use super::{REGISTRATION_DATE, REG_MONTH, REG_YEAR};

// ---------------------------------------------------------------------------
// Registration-date expansion
// ---------------------------------------------------------------------------

/// Accepted calendar-date formats, tried in order. Day-first formats come
/// first: an ambiguous "03/04/2021" is day 3, month 4. Year-first strings
/// cannot match a day-first format, so the ordering is safe for ISO dates.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Parse a single date string against the accepted formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Decompose the registration date into numeric `RegYear` / `RegMonth`
/// columns. No-op when the column is absent.
///
/// Parsing degrades per cell: an unparseable value yields missing in both
/// derived columns, never an error. The derived columns are then
/// median-imputed independently, so they end up fully populated whenever at
/// least one row parsed. The raw date column itself is left in place; the
/// pruning stage removes it.
pub fn expand_registration_date(table: &mut Table) {
    if !table.has_column(REGISTRATION_DATE) {
        return;
    }

    let mut years = Vec::with_capacity(table.len());
    let mut months = Vec::with_capacity(table.len());
    let mut unparsed = 0usize;

    for row in &table.rows {
        let parsed = match Table::cell(row, REGISTRATION_DATE) {
            CellValue::String(s) => parse_date(s),
            _ => None,
        };
        match parsed {
            Some(date) => {
                years.push(CellValue::Integer(i64::from(date.year())));
                months.push(CellValue::Integer(i64::from(date.month())));
            }
            None => {
                unparsed += 1;
                years.push(CellValue::Null);
                months.push(CellValue::Null);
            }
        }
    }

    if unparsed > 0 {
        warn!("{REGISTRATION_DATE}: {unparsed} value(s) did not parse as a date");
    }

    table.add_column(REG_YEAR, years);
    table.add_column(REG_MONTH, months);

    for column in [REG_YEAR, REG_MONTH] {
        if impute_median(table, column).is_none() && !table.is_empty() {
            warn!("{column}: no date parsed anywhere, cannot impute");
        }
    }
}

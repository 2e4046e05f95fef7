//! Cleaning pipeline: the fixed sequence of column rules applied between
//! load and write.
//!
//! ```text
//!   load ──► Age impute ──► ticket row filter ──► satisfaction repair
//!        ──► date expansion ──► MonetaryPerDay ──► prune ──► write
//! ```
//!
//! Each optional rule decides its applicability once, at entry, from column
//! presence; the two ratio operands are the only hard requirement.

pub mod dates;
pub mod impute;

use std::path::Path;

use log::{debug, info, warn};

use crate::data::loader;
use crate::data::model::{CellValue, Table};
use crate::data::writer;
use crate::error::{Error, Result};

use self::impute::impute_median;

// ---------------------------------------------------------------------------
// Column names the rules key on
// ---------------------------------------------------------------------------

pub const AGE: &str = "Age";
pub const SUPPORT_TICKETS: &str = "SupportTicketsCount";
pub const SATISFACTION: &str = "SatisfactionScore";
pub const SATISFACTION_WAS_INVALID: &str = "Satisfaction_was_invalid";
pub const REGISTRATION_DATE: &str = "RegistrationDate";
pub const REG_YEAR: &str = "RegYear";
pub const REG_MONTH: &str = "RegMonth";
pub const MONETARY_TOTAL: &str = "MonetaryTotal";
pub const RECENCY: &str = "Recency";
pub const MONETARY_PER_DAY: &str = "MonetaryPerDay";

/// Dropped from every output: raw consent flag, the transient date column,
/// and the raw IP field.
const PRUNED_COLUMNS: &[&str] = &["NewsletterSubscribed", REGISTRATION_DATE, "LastLoginIP"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Run the whole cleaning pipeline: load `input`, apply every rule in order,
/// write the result to `output`, and return the cleaned table.
pub fn preprocess(input: &Path, output: &Path) -> Result<Table> {
    info!("loading data from {}", input.display());
    let mut table = loader::load_csv(input)?;
    info!(
        "loaded {} rows across {} columns",
        table.len(),
        table.columns.len()
    );

    fill_age(&mut table);
    filter_ticket_range(&mut table);
    repair_satisfaction(&mut table);
    dates::expand_registration_date(&mut table);
    derive_monetary_per_day(&mut table)?;
    prune_columns(&mut table);

    writer::write_csv(&table, output)?;
    info!(
        "preprocessing finished, saved {} rows to {}",
        table.len(),
        output.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Column rules
// ---------------------------------------------------------------------------

/// Median-fill missing ages. No-op without an `Age` column.
fn fill_age(table: &mut Table) {
    if !table.has_column(AGE) {
        return;
    }
    match impute_median(table, AGE) {
        Some(m) => debug!("{AGE}: filled missing values with median {m}"),
        None => warn!("{AGE}: column has no numeric values, left as-is"),
    }
}

fn in_ticket_range(v: f64) -> bool {
    (0.0..=20.0).contains(&v)
}

/// Drop rows whose ticket count falls outside the plausible range. Missing
/// and non-numeric counts are dropped too. No-op without the column.
fn filter_ticket_range(table: &mut Table) {
    if !table.has_column(SUPPORT_TICKETS) {
        return;
    }
    let before = table.len();
    table.retain_rows(|row| {
        Table::cell(row, SUPPORT_TICKETS)
            .as_f64()
            .is_some_and(in_ticket_range)
    });
    let dropped = before - table.len();
    if dropped > 0 {
        info!("{SUPPORT_TICKETS}: dropped {dropped} out-of-range row(s)");
    }
}

fn satisfaction_valid(v: f64) -> bool {
    (1.0..=5.0).contains(&v)
}

/// Repair out-of-range satisfaction scores. No-op without the column.
///
/// The audit column is derived from the values as loaded, before any repair,
/// then the sentinels become missing and the column is median-filled from
/// the in-range values only.
fn repair_satisfaction(table: &mut Table) {
    if !table.has_column(SATISFACTION) {
        return;
    }

    let flags: Vec<CellValue> = table
        .rows
        .iter()
        .map(|row| {
            let invalid = Table::cell(row, SATISFACTION)
                .as_f64()
                .is_some_and(|v| !satisfaction_valid(v));
            CellValue::Integer(i64::from(invalid))
        })
        .collect();
    table.add_column(SATISFACTION_WAS_INVALID, flags);

    for row in &mut table.rows {
        let cell = row
            .entry(SATISFACTION.to_string())
            .or_insert(CellValue::Null);
        match cell.as_f64() {
            Some(v) if satisfaction_valid(v) => {}
            // Sentinels and non-numeric leftovers alike become missing.
            _ => *cell = CellValue::Null,
        }
    }

    match impute_median(table, SATISFACTION) {
        Some(m) => debug!("{SATISFACTION}: repaired sentinels, imputed with median {m}"),
        None => warn!("{SATISFACTION}: no in-range values, sentinels left missing"),
    }
}

/// Append the monetary-value-per-day-of-tenure feature. Unlike the optional
/// rules this one requires its operands.
fn derive_monetary_per_day(table: &mut Table) -> Result<()> {
    for required in [MONETARY_TOTAL, RECENCY] {
        if !table.has_column(required) {
            return Err(Error::MissingColumn(required.to_string()));
        }
    }

    let cells: Vec<CellValue> = table
        .rows
        .iter()
        .map(|row| {
            let monetary = Table::cell(row, MONETARY_TOTAL).as_f64();
            let recency = Table::cell(row, RECENCY).as_f64();
            match (monetary, recency) {
                // +1 keeps the division defined at Recency = 0.
                (Some(m), Some(r)) => CellValue::Float(m / (r + 1.0)),
                _ => CellValue::Null,
            }
        })
        .collect();
    table.add_column(MONETARY_PER_DAY, cells);
    Ok(())
}

/// Remove the columns no downstream consumer should see; silently skips
/// the ones that are absent.
fn prune_columns(table: &mut Table) {
    for name in PRUNED_COLUMNS {
        if table.has_column(name) {
            debug!("dropping column {name}");
            table.drop_column(name);
        }
    }
}

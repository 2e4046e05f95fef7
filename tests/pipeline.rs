use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tempfile::{tempdir, NamedTempFile};

use tablewash::{preprocess, CellValue, Error, Table};

/// Helper to create a temp CSV file
fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{content}").expect("write temp csv");
    file
}

fn column(table: &Table, name: &str) -> Vec<CellValue> {
    table
        .rows
        .iter()
        .map(|row| Table::cell(row, name).clone())
        .collect()
}

const CUSTOMERS: &str = "\
CustomerID,Age,SupportTicketsCount,SatisfactionScore,RegistrationDate,MonetaryTotal,Recency,NewsletterSubscribed,LastLoginIP
1,20,5,3,01/02/2020,100.0,4,true,192.168.0.1
2,,999,99,2020-03-15,50.0,0,false,10.0.0.2
3,40,2,-1,invalid,30.0,2,true,10.0.0.3
4,28,10,4,15/06/2021,0.0,9,false,10.0.0.4
5,31,-1,5,2021-07-01,10.0,1,true,10.0.0.5
";

#[test]
fn test_full_pipeline_output() -> Result<()> {
    let input = create_temp_csv(CUSTOMERS);
    let dir = tempdir()?;
    let output = dir.path().join("cleaned.csv");

    let table = preprocess(input.path(), &output)?;

    // Rows 2 (999 tickets) and 5 (-1 tickets) are gone; everything the
    // pipeline derives is appended after the surviving source columns.
    assert_eq!(
        fs::read_to_string(&output)?,
        "\
CustomerID,Age,SupportTicketsCount,SatisfactionScore,MonetaryTotal,Recency,Satisfaction_was_invalid,RegYear,RegMonth,MonetaryPerDay
1,20,5,3,100,4,0,2020,2,20
3,40,2,3.5,30,2,1,2020.5,4,10
4,28,10,4,0,9,0,2021,6,0
"
    );

    // The returned table matches what was written.
    assert_eq!(table.len(), 3);
    for gone in ["NewsletterSubscribed", "RegistrationDate", "LastLoginIP"] {
        assert!(!table.has_column(gone), "{gone} must not survive");
    }
    Ok(())
}

#[test]
fn test_pipeline_properties_hold() -> Result<()> {
    let input = create_temp_csv(CUSTOMERS);
    let dir = tempdir()?;
    let output = dir.path().join("cleaned.csv");

    let table = preprocess(input.path(), &output)?;

    // Every surviving ticket count sits inside [0, 20].
    for cell in column(&table, "SupportTicketsCount") {
        let v = cell.as_f64().expect("ticket counts are numeric");
        assert!((0.0..=20.0).contains(&v));
    }

    // Every repaired satisfaction score sits inside [1, 5], and the audit
    // flag marks exactly the row whose original value was out of range.
    for cell in column(&table, "SatisfactionScore") {
        let v = cell.as_f64().expect("scores are numeric after repair");
        assert!((1.0..=5.0).contains(&v));
    }
    assert_eq!(
        column(&table, "Satisfaction_was_invalid"),
        vec![
            CellValue::Integer(0),
            CellValue::Integer(1),
            CellValue::Integer(0),
        ]
    );

    // Derived date features are fully populated.
    for name in ["RegYear", "RegMonth"] {
        assert!(column(&table, name).iter().all(|c| !c.is_null()));
    }

    // MonetaryPerDay = MonetaryTotal / (Recency + 1), exactly.
    for row in &table.rows {
        let m = Table::cell(row, "MonetaryTotal").as_f64().unwrap();
        let r = Table::cell(row, "Recency").as_f64().unwrap();
        let per_day = Table::cell(row, "MonetaryPerDay").as_f64().unwrap();
        assert_eq!(per_day, m / (r + 1.0));
        assert!(per_day.is_finite());
    }
    Ok(())
}

#[test]
fn test_runs_are_deterministic() -> Result<()> {
    let input = create_temp_csv(CUSTOMERS);
    let dir = tempdir()?;
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    preprocess(input.path(), &first)?;
    preprocess(input.path(), &second)?;

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[test]
fn test_unreferenced_columns_pass_through() -> Result<()> {
    let input = create_temp_csv("Country,MonetaryTotal,Recency\nfr,10.0,1\nde,20.0,3\n");
    let dir = tempdir()?;
    let output = dir.path().join("out.csv");

    let table = preprocess(input.path(), &output)?;

    assert_eq!(
        column(&table, "Country"),
        vec![
            CellValue::String("fr".into()),
            CellValue::String("de".into()),
        ]
    );
    assert_eq!(
        column(&table, "MonetaryPerDay"),
        vec![CellValue::Float(5.0), CellValue::Float(5.0)]
    );
    Ok(())
}

#[test]
fn test_missing_input_reports_not_found_and_writes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("out.csv");

    let err = preprocess(Path::new("no/such/customers.csv"), &output).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_missing_required_column_aborts_before_write() -> Result<()> {
    let input = create_temp_csv("MonetaryTotal\n5.0\n");
    let dir = tempdir()?;
    let output = dir.path().join("out.csv");

    let err = preprocess(input.path(), &output).unwrap_err();
    match err {
        Error::MissingColumn(name) => assert_eq!(name, "Recency"),
        other => panic!("expected MissingColumn, got {other}"),
    }
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_output_directory_is_created() -> Result<()> {
    let input = create_temp_csv("MonetaryTotal,Recency\n10.0,1\n");
    let dir = tempdir()?;
    let output = dir.path().join("data/processed/out.csv");

    preprocess(input.path(), &output)?;
    assert!(output.exists());
    Ok(())
}

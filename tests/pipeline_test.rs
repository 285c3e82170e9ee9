use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use blotter::error::BlotterError;
use blotter::pipeline::Pipeline;
use blotter::types::{IncidentSource, RawRecord, RawTable};

/// Serves a fixed set of rows, honoring the requested bound.
struct FixtureSource {
    rows: Vec<serde_json::Value>,
}

#[async_trait]
impl IncidentSource for FixtureSource {
    fn source_id(&self) -> String {
        "fixture/incidents".to_string()
    }

    async fn fetch_raw(&self, limit: u32) -> blotter::error::Result<RawTable> {
        let records: Vec<RawRecord> = self
            .rows
            .iter()
            .take(limit as usize)
            .map(|row| row.as_object().cloned().expect("fixture rows are objects"))
            .collect();
        Ok(RawTable::new(records))
    }
}

/// Fails every fetch the way a garbled payload would.
struct BrokenSource;

#[async_trait]
impl IncidentSource for BrokenSource {
    fn source_id(&self) -> String {
        "fixture/broken".to_string()
    }

    async fn fetch_raw(&self, _limit: u32) -> blotter::error::Result<RawTable> {
        let err = serde_json::from_slice::<Vec<RawRecord>>(b"<html>").expect_err("not json");
        Err(err.into())
    }
}

fn complete_row(case_number: &str) -> serde_json::Value {
    json!({
        "case_number": case_number,
        "date": "2020-01-01T05:00:00.000",
        "victims": "2",
        "crimename2": "theft",
        "district": "north",
        "location": "1 main st",
        "city": "rockville",
        "state": "MD",
        "zip_code": "20850",
        "police_district_number": "3",
        "latitude": "39.08",
        "longitude": "-77.15"
    })
}

#[tokio::test]
async fn run_cleans_fetched_rows_end_to_end() -> Result<()> {
    let mut gap_row = complete_row("B2");
    gap_row["latitude"] = json!(null);

    let source = FixtureSource {
        rows: vec![complete_row("A1"), gap_row, complete_row("C3")],
    };

    let run = Pipeline::run(&source, 100).await?;

    assert_eq!(run.summary.source, "fixture/incidents");
    assert_eq!(run.summary.fetched_rows, 3);
    assert_eq!(run.summary.cleaned_rows, 2);
    assert_eq!(run.summary.quarantined_rows, 1);
    assert_eq!(
        run.summary.cleaned_rows + run.summary.quarantined_rows,
        run.summary.fetched_rows
    );

    let first = &run.table.incidents[0];
    assert_eq!(first.case_number, "A1");
    assert_eq!(
        first.date,
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap()
    );
    assert_eq!(first.victims, 2);
    assert_eq!(first.crime_name, "Theft");
    assert_eq!(first.location, "1 Main St");
    assert_eq!(first.state, "MD");
    assert_eq!(first.latitude, 39.08);

    // Quarantined rows keep their other values for auditing.
    assert_eq!(run.table.quarantined[0].case_number.as_deref(), Some("B2"));
    assert_eq!(run.table.quarantined[0].missing_columns(), vec!["latitude"]);
    Ok(())
}

#[tokio::test]
async fn run_honors_the_row_bound() -> Result<()> {
    let rows = (0..10).map(|i| complete_row(&format!("A{i}"))).collect();
    let source = FixtureSource { rows };

    let run = Pipeline::run(&source, 4).await?;
    assert_eq!(run.summary.fetched_rows, 4);
    assert_eq!(run.summary.cleaned_rows, 4);
    Ok(())
}

#[tokio::test]
async fn fetch_failure_aborts_the_run() {
    let err = Pipeline::run(&BrokenSource, 10)
        .await
        .expect_err("fetch fails");
    assert!(matches!(err, BlotterError::Payload(_)));
}

#[tokio::test]
async fn schema_drift_aborts_the_run() {
    let mut row = complete_row("A1");
    row.as_object_mut().unwrap().remove("district");
    let source = FixtureSource { rows: vec![row] };

    let err = Pipeline::run(&source, 10)
        .await
        .expect_err("column is gone");
    match err {
        BlotterError::Schema { columns } => assert_eq!(columns, vec!["district"]),
        other => panic!("expected schema error, got {other:?}"),
    }
}

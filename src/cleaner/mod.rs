//! Cleaning stage: project the selected columns out of each raw row, coerce
//! them to their target types, normalize text, and partition rows by whether
//! every selected value is present.

pub mod text;
pub mod timestamp;

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::info;

use crate::constants::{
    COL_CASE_NUMBER, COL_CITY, COL_CRIME_NAME, COL_DATE, COL_DISTRICT, COL_LATITUDE,
    COL_LOCATION, COL_LONGITUDE, COL_POLICE_DISTRICT_NUMBER, COL_STATE, COL_VICTIMS,
    COL_ZIP_CODE, SELECTED_COLUMNS,
};
use crate::error::{BlotterError, Result};
use crate::types::{CleanedTable, PartialIncident, RawRecord, RawTable};

/// Clean one fetched table. Every row lands on exactly one side of the
/// output: typed and complete, or quarantined with its gaps intact. A value
/// that is present but unreadable aborts the whole pass instead.
pub fn clean(raw: &RawTable) -> Result<CleanedTable> {
    ensure_selected_columns(raw)?;

    let mut incidents = Vec::with_capacity(raw.len());
    let mut quarantined = Vec::new();
    for record in raw.records() {
        match coerce_record(record)?.into_complete() {
            Ok(incident) => incidents.push(incident),
            Err(partial) => quarantined.push(partial),
        }
    }

    info!(
        cleaned = incidents.len(),
        quarantined = quarantined.len(),
        "cleaning pass finished"
    );
    Ok(CleanedTable {
        incidents,
        quarantined,
    })
}

/// The selected columns must all be observed somewhere in the table. A column
/// absent from every row means the upstream schema moved out from under us,
/// which is worth an abort rather than a silently empty output.
fn ensure_selected_columns(raw: &RawTable) -> Result<()> {
    let observed = raw.columns();
    let missing: Vec<&'static str> = SELECTED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !observed.contains(column))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(BlotterError::Schema { columns: missing })
    }
}

/// Project one raw row onto the selected columns and coerce each cell.
fn coerce_record(record: &RawRecord) -> Result<PartialIncident> {
    Ok(PartialIncident {
        case_number: text_cell(record, COL_CASE_NUMBER)?,
        date: text_cell(record, COL_DATE)?
            .map(|value| coerce_timestamp(&value))
            .transpose()?,
        victims: text_cell(record, COL_VICTIMS)?
            .map(|value| coerce_count(COL_VICTIMS, &value))
            .transpose()?,
        crime_name: text_cell(record, COL_CRIME_NAME)?.map(|value| text::title_case(&value)),
        district: text_cell(record, COL_DISTRICT)?.map(|value| text::title_case(&value)),
        location: text_cell(record, COL_LOCATION)?.map(|value| text::title_case(&value)),
        city: text_cell(record, COL_CITY)?.map(|value| text::title_case(&value)),
        state: text_cell(record, COL_STATE)?,
        zip_code: text_cell(record, COL_ZIP_CODE)?,
        police_district_number: text_cell(record, COL_POLICE_DISTRICT_NUMBER)?,
        latitude: text_cell(record, COL_LATITUDE)?
            .map(|value| coerce_float(COL_LATITUDE, &value))
            .transpose()?,
        longitude: text_cell(record, COL_LONGITUDE)?
            .map(|value| coerce_float(COL_LONGITUDE, &value))
            .transpose()?,
    })
}

/// Read one cell as text. A missing key and a JSON null are both "no value";
/// scalar non-strings are taken in their text form. Nested values mean the
/// row is not flat tabular data, which no selected column tolerates.
fn text_cell(record: &RawRecord, column: &'static str) -> Result<Option<String>> {
    match record.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(Value::Bool(value)) => Ok(Some(value.to_string())),
        Some(nested) => Err(BlotterError::TypeCoercion {
            column,
            value: nested.to_string(),
            reason: "nested value where a scalar cell was expected".to_string(),
        }),
    }
}

fn coerce_timestamp(value: &str) -> Result<NaiveDateTime> {
    timestamp::parse(value).map_err(|err| BlotterError::TypeCoercion {
        column: COL_DATE,
        value: value.to_string(),
        reason: err.to_string(),
    })
}

fn coerce_count(column: &'static str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|err| BlotterError::TypeCoercion {
            column,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

fn coerce_float(column: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|err| BlotterError::TypeCoercion {
            column,
            value: value.to_string(),
            reason: err.to_string(),
        })
}

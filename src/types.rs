use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COL_CASE_NUMBER, COL_CITY, COL_CRIME_NAME, COL_DATE, COL_DISTRICT, COL_LATITUDE,
    COL_LOCATION, COL_LONGITUDE, COL_POLICE_DISTRICT_NUMBER, COL_STATE, COL_VICTIMS,
    COL_ZIP_CODE,
};
use crate::error::Result;

/// One raw row as returned by the open-data API: flat string-keyed JSON.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// The rows of one fetch, in response order.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    records: Vec<RawRecord>,
}

impl RawTable {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Union of keys observed across all rows, in first-seen order. Upstream
    /// omits a key entirely when a cell is empty, so no single row can be
    /// trusted to show the full column set.
    pub fn columns(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for record in &self.records {
            for key in record.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.as_str());
                }
            }
        }
        columns
    }
}

/// One row projected onto the selected columns, types applied, presence not
/// yet decided. Every field is optional so upstream gaps survive projection
/// and the partition step can rule on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialIncident {
    pub case_number: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub victims: Option<u32>,
    #[serde(rename = "crimename2")]
    pub crime_name: Option<String>,
    pub district: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub police_district_number: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PartialIncident {
    /// Selected columns this row lacks, in output order.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.case_number.is_none() {
            missing.push(COL_CASE_NUMBER);
        }
        if self.date.is_none() {
            missing.push(COL_DATE);
        }
        if self.victims.is_none() {
            missing.push(COL_VICTIMS);
        }
        if self.crime_name.is_none() {
            missing.push(COL_CRIME_NAME);
        }
        if self.district.is_none() {
            missing.push(COL_DISTRICT);
        }
        if self.location.is_none() {
            missing.push(COL_LOCATION);
        }
        if self.city.is_none() {
            missing.push(COL_CITY);
        }
        if self.state.is_none() {
            missing.push(COL_STATE);
        }
        if self.zip_code.is_none() {
            missing.push(COL_ZIP_CODE);
        }
        if self.police_district_number.is_none() {
            missing.push(COL_POLICE_DISTRICT_NUMBER);
        }
        if self.latitude.is_none() {
            missing.push(COL_LATITUDE);
        }
        if self.longitude.is_none() {
            missing.push(COL_LONGITUDE);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_columns().is_empty()
    }

    /// Promote to a cleaned incident, or hand the row back unchanged if any
    /// field is missing.
    pub fn into_complete(self) -> std::result::Result<Incident, PartialIncident> {
        match self {
            PartialIncident {
                case_number: Some(case_number),
                date: Some(date),
                victims: Some(victims),
                crime_name: Some(crime_name),
                district: Some(district),
                location: Some(location),
                city: Some(city),
                state: Some(state),
                zip_code: Some(zip_code),
                police_district_number: Some(police_district_number),
                latitude: Some(latitude),
                longitude: Some(longitude),
            } => Ok(Incident {
                case_number,
                date,
                victims,
                crime_name,
                district,
                location,
                city,
                state,
                zip_code,
                police_district_number,
                latitude,
                longitude,
            }),
            partial => Err(partial),
        }
    }
}

/// A fully-typed cleaned incident. A row only reaches this type by carrying
/// a value in all twelve selected columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub case_number: String,
    pub date: NaiveDateTime,
    pub victims: u32,
    #[serde(rename = "crimename2")]
    pub crime_name: String,
    pub district: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub police_district_number: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Output of one cleaning pass: complete rows in response order, plus the
/// rows set aside for missing values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanedTable {
    pub incidents: Vec<Incident>,
    pub quarantined: Vec<PartialIncident>,
}

/// A bounded source of raw incident rows.
#[async_trait::async_trait]
pub trait IncidentSource: Send + Sync {
    /// Identifier shown in progress output and run summaries.
    fn source_id(&self) -> String;

    /// Fetch up to `limit` rows in upstream order.
    async fn fetch_raw(&self, limit: u32) -> Result<RawTable>;
}

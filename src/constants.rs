/// Endpoint and column constants shared across the pipeline, so the CLI
/// defaults, the cleaner, and the display tables never drift apart.

// Open-data portal serving the incident dataset.
pub const DATA_HOST: &str = "data.montgomerycountymd.gov";

// Dataset identifier assigned by the portal.
pub const CRIME_DATASET: &str = "yc8a-5df8";

/// Row bound for a single fetch.
pub const DEFAULT_LIMIT: u32 = 2000;

/// Cleaned rows displayed after a run.
pub const DEFAULT_HEAD_ROWS: usize = 5;

// Upstream names of the columns the cleaner keeps.
pub const COL_CASE_NUMBER: &str = "case_number";
pub const COL_DATE: &str = "date";
pub const COL_VICTIMS: &str = "victims";
pub const COL_CRIME_NAME: &str = "crimename2";
pub const COL_DISTRICT: &str = "district";
pub const COL_LOCATION: &str = "location";
pub const COL_CITY: &str = "city";
pub const COL_STATE: &str = "state";
pub const COL_ZIP_CODE: &str = "zip_code";
pub const COL_POLICE_DISTRICT_NUMBER: &str = "police_district_number";
pub const COL_LATITUDE: &str = "latitude";
pub const COL_LONGITUDE: &str = "longitude";

/// The twelve selected columns, in output order.
pub const SELECTED_COLUMNS: [&str; 12] = [
    COL_CASE_NUMBER,
    COL_DATE,
    COL_VICTIMS,
    COL_CRIME_NAME,
    COL_DISTRICT,
    COL_LOCATION,
    COL_CITY,
    COL_STATE,
    COL_ZIP_CODE,
    COL_POLICE_DISTRICT_NUMBER,
    COL_LATITUDE,
    COL_LONGITUDE,
];

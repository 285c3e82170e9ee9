//! Console rendering for run results: the counts block, the head of the
//! cleaned table, and the selected-column listing.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cleaner::timestamp::TIMESTAMP_FORMAT;
use crate::constants::{
    COL_CASE_NUMBER, COL_CITY, COL_CRIME_NAME, COL_DATE, COL_DISTRICT, COL_LATITUDE,
    COL_LOCATION, COL_LONGITUDE, COL_POLICE_DISTRICT_NUMBER, COL_STATE, COL_VICTIMS,
    COL_ZIP_CODE, SELECTED_COLUMNS,
};
use crate::pipeline::RunSummary;
use crate::types::{CleanedTable, Incident};

/// Cleaned type shown for each selected column, in output order.
const COLUMN_TYPES: [(&str, &str); 12] = [
    (COL_CASE_NUMBER, "text"),
    (COL_DATE, "datetime"),
    (COL_VICTIMS, "count"),
    (COL_CRIME_NAME, "title-cased text"),
    (COL_DISTRICT, "title-cased text"),
    (COL_LOCATION, "title-cased text"),
    (COL_CITY, "title-cased text"),
    (COL_STATE, "text"),
    (COL_ZIP_CODE, "text"),
    (COL_POLICE_DISTRICT_NUMBER, "text"),
    (COL_LATITUDE, "float"),
    (COL_LONGITUDE, "float"),
];

/// Print the counts block for one finished run.
pub fn print_summary(summary: &RunSummary) {
    println!("\n📊 Run results for {}:", summary.source);
    println!("   Fetched rows:     {}", summary.fetched_rows);
    println!("   Cleaned rows:     {}", summary.cleaned_rows);
    println!("   Quarantined rows: {}", summary.quarantined_rows);
}

/// Print the first `rows` cleaned incidents.
pub fn print_head(table: &CleanedTable, rows: usize) {
    if table.incidents.is_empty() {
        println!("\n(no complete rows to display)");
        return;
    }
    println!("\n{}", head_table(table, rows));
}

/// Print the selected columns and the type each cleans to.
pub fn print_columns() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec!["Column", "Cleaned type"]);
    for (column, cleaned_type) in COLUMN_TYPES {
        table.add_row(vec![column, cleaned_type]);
    }
    println!("{table}");
}

fn head_table(table: &CleanedTable, rows: usize) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(
        SELECTED_COLUMNS
            .iter()
            .map(Cell::new)
            .collect::<Vec<_>>(),
    );
    for incident in table.incidents.iter().take(rows) {
        out.add_row(incident_cells(incident));
    }
    out
}

/// One rendered row, cells in selected-column order.
fn incident_cells(incident: &Incident) -> Vec<Cell> {
    vec![
        Cell::new(&incident.case_number),
        Cell::new(incident.date.format(TIMESTAMP_FORMAT)),
        Cell::new(incident.victims).set_alignment(CellAlignment::Right),
        Cell::new(&incident.crime_name),
        Cell::new(&incident.district),
        Cell::new(&incident.location),
        Cell::new(&incident.city),
        Cell::new(&incident.state),
        Cell::new(&incident.zip_code),
        Cell::new(&incident.police_district_number),
        Cell::new(incident.latitude).set_alignment(CellAlignment::Right),
        Cell::new(incident.longitude).set_alignment(CellAlignment::Right),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn incident() -> Incident {
        Incident {
            case_number: "A1".to_string(),
            date: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(5, 0, 0)
                .unwrap(),
            victims: 2,
            crime_name: "Theft".to_string(),
            district: "North".to_string(),
            location: "1 Main St".to_string(),
            city: "Rockville".to_string(),
            state: "MD".to_string(),
            zip_code: "20850".to_string(),
            police_district_number: "3".to_string(),
            latitude: 39.08,
            longitude: -77.15,
        }
    }

    #[test]
    fn head_shows_at_most_the_requested_rows() {
        let table = CleanedTable {
            incidents: vec![incident(), incident(), incident()],
            quarantined: Vec::new(),
        };

        let rendered = head_table(&table, 2).to_string();
        assert_eq!(rendered.matches("A1").count(), 2);
    }

    #[test]
    fn head_renders_headers_and_normalized_values() {
        let table = CleanedTable {
            incidents: vec![incident()],
            quarantined: Vec::new(),
        };

        let rendered = head_table(&table, 5).to_string();
        for column in SELECTED_COLUMNS {
            assert!(rendered.contains(column), "missing header {column}");
        }
        assert!(rendered.contains("2020-01-01 05:00:00"));
        assert!(rendered.contains("Rockville"));
        assert!(rendered.contains("-77.15"));
    }

    #[test]
    fn column_listing_matches_the_selected_order() {
        let listed: Vec<&str> = COLUMN_TYPES.iter().map(|(column, _)| *column).collect();
        assert_eq!(listed, SELECTED_COLUMNS.to_vec());
    }
}

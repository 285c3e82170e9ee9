use chrono::NaiveDateTime;

/// Pattern a scrubbed timestamp must match exactly.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Separator the portal inserts between the date and time parts.
const DATE_TIME_SEPARATOR: char = 'T';

// Zero fractional-seconds suffix the portal appends to every timestamp.
const ZERO_FRACTION_SUFFIX: &str = ".000";

/// Remove the two textual artifacts the portal adds to timestamps. The
/// suffix strip is anchored to the end of the value, so a `.000` sequence
/// anywhere else is left alone.
pub fn scrub(value: &str) -> String {
    let spaced = value.replace(DATE_TIME_SEPARATOR, " ");
    match spaced.strip_suffix(ZERO_FRACTION_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => spaced,
    }
}

/// Scrub and parse one raw timestamp value.
pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(&scrub(value), TIMESTAMP_FORMAT)
}

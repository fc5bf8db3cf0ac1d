//! Value parsers for command-line arguments.

use clinic_core::{AppointmentStatus, Gender};

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

/// Formats accepted for local date-times, as typed into a date picker
const LOCAL_DATE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parse an appointment date.
///
/// RFC 3339 input keeps its offset; a bare `YYYY-MM-DDTHH:MM` is read in the
/// local time zone. Both are converted to UTC.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, String> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }

    let naive = LOCAL_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| {
            format!("invalid date '{input}': expected RFC 3339 or YYYY-MM-DDTHH:MM")
        })?;

    local_to_utc(naive)
}

/// Resolve a local wall-clock time; the earlier instant wins when ambiguous
pub fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>, String> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(date) | LocalResult::Ambiguous(date, _) => Ok(date.with_timezone(&Utc)),
        LocalResult::None => Err(format!("{naive} does not exist in the local time zone")),
    }
}

pub fn parse_gender(input: &str) -> Result<Gender, String> {
    input
        .parse()
        .map_err(|_| format!("invalid gender '{input}': expected male, female or other"))
}

pub fn parse_status(input: &str) -> Result<AppointmentStatus, String> {
    input.parse().map_err(|_| {
        format!("invalid status '{input}': expected scheduled, completed or cancelled")
    })
}
